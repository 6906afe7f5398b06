//! Group-creation session service.
//!
//! # Responsibility
//! - Own the directory and selection for one group-creation flow.
//! - Serve filtered rows with their selection flag derived on read.
//! - Gate and perform submission.
//!
//! # Invariants
//! - Selection only ever holds ids present in the directory.
//! - A row is marked selected iff its id is in the selection.
//! - A new session always starts with an empty selection.

use crate::directory::{Directory, DirectoryError};
use crate::model::contact::{Contact, ContactId};
use crate::model::group::GroupCreationResult;
use crate::repo::contact_source::ContactSource;
use crate::selection::SelectionSet;
use crate::service::group_service::{self, GroupValidationError};
use log::{debug, info, warn};

/// Contact row projected for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRow<'a> {
    pub contact: &'a Contact,
    pub selected: bool,
}

/// Outcome of a single toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Membership changed.
    Changed,
    /// Contact was already in the requested state.
    Unchanged,
    /// No contact with this id exists in the session directory.
    UnknownContact(ContactId),
}

/// One group-creation flow over an owned contact directory.
#[derive(Debug, Clone)]
pub struct GroupSession {
    directory: Directory,
    selection: SelectionSet,
}

impl GroupSession {
    /// Starts a session over `contacts` with nothing selected.
    pub fn start(contacts: Vec<Contact>) -> Result<Self, DirectoryError> {
        let directory = Directory::from_contacts(contacts)?;
        info!(
            "event=group_session_start module=group status=ok contacts={}",
            directory.len()
        );
        Ok(Self {
            directory,
            selection: SelectionSet::new(),
        })
    }

    /// Starts a session from a contact source snapshot.
    pub fn start_from(source: &impl ContactSource) -> Result<Self, DirectoryError> {
        Self::start(source.load_contacts())
    }

    /// Replaces the directory and clears the selection.
    ///
    /// On error both directory and selection are left untouched.
    pub fn reload(&mut self, contacts: Vec<Contact>) -> Result<(), DirectoryError> {
        self.directory.load(contacts)?;
        self.selection.deselect_all();
        Ok(())
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns every row in directory order.
    pub fn rows(&self) -> Vec<ContactRow<'_>> {
        self.search(None)
    }

    /// Returns filtered rows in directory order.
    pub fn search(&self, query: Option<&str>) -> Vec<ContactRow<'_>> {
        self.directory
            .filter(query)
            .into_iter()
            .map(|contact| ContactRow {
                contact,
                selected: self.selection.contains(contact.id),
            })
            .collect()
    }

    /// Sets the selection state of one contact.
    ///
    /// Unknown ids are ignored and reported, never inserted.
    pub fn toggle(&mut self, id: ContactId, is_selected: bool) -> SelectionOutcome {
        if !self.directory.contains(id) {
            warn!(
                "event=group_toggle module=group status=ignored reason=unknown_contact contact_id={id}"
            );
            return SelectionOutcome::UnknownContact(id);
        }

        let outcome = if self.selection.toggle(id, is_selected) {
            SelectionOutcome::Changed
        } else {
            SelectionOutcome::Unchanged
        };
        debug!(
            "event=group_toggle module=group status=ok contact_id={id} selected={is_selected} count={}",
            self.selection.count()
        );
        outcome
    }

    /// Selects every contact in the directory.
    pub fn select_all(&mut self) {
        self.selection.select_all(self.directory.ids());
        debug!(
            "event=group_select_all module=group status=ok count={}",
            self.selection.count()
        );
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
        debug!("event=group_deselect_all module=group status=ok count=0");
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    pub fn is_selected(&self, id: ContactId) -> bool {
        self.selection.contains(id)
    }

    /// Whether the create action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Whether leaving now would discard user input.
    pub fn has_pending_input(&self, name_draft: &str) -> bool {
        !self.selection.is_empty() || !name_draft.trim().is_empty()
    }

    /// Validates the draft and produces the group result.
    ///
    /// Leaves the session untouched; resetting afterwards is up to the caller.
    pub fn submit(&self, name: &str) -> Result<GroupCreationResult, GroupValidationError> {
        group_service::submit(name, &self.selection, &self.directory)
    }
}
