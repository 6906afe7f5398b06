//! Query normalization and per-contact matching.
//!
//! Matching is plain substring search: lowercase on name and email, raw on
//! phone numbers. No diacritic folding is applied.

use crate::model::contact::Contact;

/// Trims and lowercases a raw query.
///
/// Returns `None` when nothing is left, meaning "no filter".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Returns whether `contact` matches an already-normalized query.
pub fn matches_query(contact: &Contact, normalized: &str) -> bool {
    contact.name.to_lowercase().contains(normalized)
        || contact.phone_number.contains(normalized)
        || contact
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(normalized))
}

#[cfg(test)]
mod tests {
    use super::{matches_query, normalize_query};
    use crate::model::contact::Contact;

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  NGUYỄN "), Some("nguyễn".to_string()));
        assert_eq!(normalize_query(" \t "), None);
    }

    #[test]
    fn matches_any_of_three_fields() {
        let contact = Contact::new(1, "Nguyễn Văn An", "0901234567").with_email("An.Nguyen@Email.com");
        assert!(matches_query(&contact, "văn"));
        assert!(matches_query(&contact, "2345"));
        assert!(matches_query(&contact, "an.nguyen@"));
        assert!(!matches_query(&contact, "van"));
    }

    #[test]
    fn missing_email_never_matches() {
        let contact = Contact::new(2, "Bình", "0907654321");
        assert!(!matches_query(&contact, "email"));
    }
}
