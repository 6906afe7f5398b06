//! Contact selection for group creation.
//!
//! # Responsibility
//! - Track which contacts are chosen during one group-creation session.
//! - Provide the count that gates submission.
//!
//! # Invariants
//! - The id set is the single source of truth for "selected".
//! - Toggling the same contact to the same state twice has no extra effect.
//! - Toggles apply in call order; the last toggle for a contact wins.

use crate::directory::Directory;
use crate::model::contact::{Contact, ContactId};
use std::collections::HashSet;

/// Set of selected contact ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ContactId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the membership of `id` to `is_selected`.
    ///
    /// Returns `true` when membership actually changed.
    pub fn toggle(&mut self, id: ContactId, is_selected: bool) -> bool {
        if is_selected {
            self.ids.insert(id)
        } else {
            self.ids.remove(&id)
        }
    }

    /// Makes the set exactly equal to `ids`. Duplicates collapse.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = ContactId>) {
        self.ids.clear();
        self.ids.extend(ids);
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<ContactId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Clones the selected contacts out of `directory`, in directory order.
    ///
    /// Ids missing from the directory are skipped.
    pub fn snapshot_in(&self, directory: &Directory) -> Vec<Contact> {
        directory
            .contacts()
            .iter()
            .filter(|contact| self.contains(contact.id))
            .cloned()
            .collect()
    }
}
