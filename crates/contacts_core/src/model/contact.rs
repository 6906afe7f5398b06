//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shown by directory and group flows.
//! - Normalize optional fields so blank values never reach callers.
//!
//! # Invariants
//! - `id` is the only identity key: equality and hashing ignore other fields.
//! - Builders and deserialization store blank `email`/`profile_image_ref` as
//!   `None`; readers (`display_email`, `has_profile_image`) also treat a blank
//!   value written directly into the public fields as absent.
//! - Selection state is not stored here; see `selection::SelectionSet`.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Stable integer identity of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Validation error for contact records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Display name is blank after trimming.
    EmptyName(ContactId),
    /// Phone number is blank after trimming.
    EmptyPhoneNumber(ContactId),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName(id) => write!(f, "contact {id} has an empty name"),
            Self::EmptyPhoneNumber(id) => write!(f, "contact {id} has an empty phone number"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub email: Option<String>,
    /// Opaque avatar reference. Only its presence is observed by core.
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub profile_image_ref: Option<String>,
}

impl Contact {
    /// Creates a contact without email or avatar.
    pub fn new(id: i64, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: ContactId(id),
            name: name.into(),
            phone_number: phone_number.into(),
            email: None,
            profile_image_ref: None,
        }
    }

    /// Sets the email; blank input clears it.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Sets the avatar reference; blank input clears it.
    pub fn with_profile_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.profile_image_ref = non_blank(image_ref.into());
        self
    }

    /// Checks the fields every rendered row depends on.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `EmptyPhoneNumber` when `phone_number` is blank.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName(self.id));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhoneNumber(self.id));
        }
        Ok(())
    }

    /// Returns whether a custom avatar reference is attached.
    pub fn has_profile_image(&self) -> bool {
        self.profile_image_ref
            .as_deref()
            .is_some_and(|image_ref| !image_ref.trim().is_empty())
    }

    /// Email to render, or `None` when the email line should be hidden.
    pub fn display_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }

    /// Uppercased first character of the name, for placeholder avatars.
    pub fn initial(&self) -> Option<String> {
        self.name
            .trim()
            .chars()
            .next()
            .map(|ch| ch.to_uppercase().collect())
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactId, ContactValidationError};

    #[test]
    fn blank_optional_fields_are_dropped() {
        let contact = Contact::new(1, "An", "0901")
            .with_email("  ")
            .with_profile_image_ref("");
        assert_eq!(contact.email, None);
        assert!(!contact.has_profile_image());
    }

    #[test]
    fn readers_ignore_blank_values_set_directly() {
        let mut contact = Contact::new(1, "An", "0901");
        contact.email = Some(" ".to_string());
        contact.profile_image_ref = Some(String::new());
        assert_eq!(contact.display_email(), None);
        assert!(!contact.has_profile_image());
    }

    #[test]
    fn validate_rejects_blank_phone() {
        let err = Contact::new(7, "An", " ").validate().unwrap_err();
        assert_eq!(err, ContactValidationError::EmptyPhoneNumber(ContactId(7)));
    }

    #[test]
    fn initial_handles_diacritics() {
        assert_eq!(
            Contact::new(7, "đặng Văn Giang", "0945678901").initial(),
            Some("Đ".to_string())
        );
        assert_eq!(Contact::new(8, "   ", "1").initial(), None);
    }
}
