//! Core domain logic for the contacts and group-creation screens.
//! This crate is the single source of truth for directory and selection rules.

pub mod directory;
pub mod logging;
pub mod model;
pub mod repo;
pub mod selection;
pub mod service;

pub use directory::{normalize_query, sample_contacts, Directory, DirectoryError};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::contact::{Contact, ContactId, ContactValidationError};
pub use model::group::GroupCreationResult;
pub use repo::contact_source::{ContactSource, InMemoryContactSource};
pub use selection::SelectionSet;
pub use service::group_service::{submit, GroupValidationError};
pub use service::group_session::{ContactRow, GroupSession, SelectionOutcome};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
