//! Group creation result.
//!
//! # Invariants
//! - `name` is trimmed and non-empty.
//! - `contacts` is non-empty and ordered like the directory.
//! - `count == contacts.len()`.

use crate::model::contact::{Contact, ContactId};
use serde::Serialize;

/// Finalized group produced by a successful submission.
///
/// Fields are private so the only constructor is the validated submit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCreationResult {
    name: String,
    contacts: Vec<Contact>,
    count: usize,
}

impl GroupCreationResult {
    pub(crate) fn new(name: String, contacts: Vec<Contact>) -> Self {
        let count = contacts.len();
        Self {
            name,
            contacts,
            count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Member IDs in directory order.
    pub fn member_ids(&self) -> Vec<ContactId> {
        self.contacts.iter().map(|contact| contact.id).collect()
    }

    /// Confirmation text shown by the caller after the group is created.
    pub fn confirmation_message(&self) -> String {
        format!("Đã tạo nhóm '{}' với {} thành viên", self.name, self.count)
    }
}
