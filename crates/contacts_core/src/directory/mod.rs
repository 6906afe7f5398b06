//! Canonical contact directory and query filtering.
//!
//! # Responsibility
//! - Own the ordered contact sequence for one screen session.
//! - Produce filtered, order-preserving views for type-as-you-search.
//!
//! # Invariants
//! - No two contacts share an `id`.
//! - Insertion order is display order.
//! - Filtering never mutates the canonical sequence.

pub mod filter;
pub mod sample;

use crate::model::contact::{Contact, ContactId};
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use filter::{matches_query, normalize_query};
pub use sample::sample_contacts;

/// Error returned when a contact batch cannot become the directory contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Two contacts in the batch share the same identity key.
    DuplicateId(ContactId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate contact id: {id}"),
        }
    }
}

impl Error for DirectoryError {}

/// Ordered in-memory contact directory.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from an initial batch.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, DirectoryError> {
        let mut directory = Self::new();
        directory.load(contacts)?;
        Ok(directory)
    }

    /// Replaces the canonical sequence wholesale.
    ///
    /// Records are accepted as-is; `Contact::validate` is left to callers
    /// that want stricter input.
    ///
    /// # Errors
    /// - `DuplicateId` when two contacts share an id. The previous contents
    ///   are kept.
    pub fn load(&mut self, contacts: Vec<Contact>) -> Result<(), DirectoryError> {
        let mut seen = HashSet::with_capacity(contacts.len());
        for contact in &contacts {
            if !seen.insert(contact.id) {
                return Err(DirectoryError::DuplicateId(contact.id));
            }
        }

        self.contacts = contacts;
        info!(
            "event=directory_load module=directory status=ok count={}",
            self.contacts.len()
        );
        Ok(())
    }

    /// Returns contacts matching `query`, in directory order.
    ///
    /// `None`, empty and whitespace-only queries return every contact.
    pub fn filter(&self, query: Option<&str>) -> Vec<&Contact> {
        let normalized = query.and_then(normalize_query);
        let hits: Vec<&Contact> = match normalized.as_deref() {
            None => self.contacts.iter().collect(),
            Some(needle) => self
                .contacts
                .iter()
                .filter(|contact| matches_query(contact, needle))
                .collect(),
        };
        debug!(
            "event=directory_filter module=directory status=ok query_len={} hits={}",
            normalized.as_deref().map_or(0, |q| q.chars().count()),
            hits.len()
        );
        hits
    }

    /// Shorthand for `filter(Some(query))`.
    pub fn filter_str(&self, query: &str) -> Vec<&Contact> {
        self.filter(Some(query))
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn ids(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.contacts.iter().map(|contact| contact.id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
