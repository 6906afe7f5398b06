//! Contact source contracts and the built-in in-memory implementation.
//!
//! # Responsibility
//! - Decouple session start from where contacts come from.
//! - Hand out owned snapshots so sessions never share live records.
//!
//! # Invariants
//! - Every call returns a fresh, independently owned batch.

use crate::directory::sample_contacts;
use crate::model::contact::Contact;

/// Supplies the contact batch a session starts from.
pub trait ContactSource {
    /// Returns the current contacts in display order.
    fn load_contacts(&self) -> Vec<Contact>;
}

/// In-memory source holding a fixed batch.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactSource {
    contacts: Vec<Contact>,
}

impl InMemoryContactSource {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Source seeded with the built-in sample contacts.
    pub fn sample() -> Self {
        Self::new(sample_contacts())
    }
}

impl ContactSource for InMemoryContactSource {
    fn load_contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }
}
