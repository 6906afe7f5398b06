//! Group draft validation and submission.
//!
//! # Responsibility
//! - Turn a (name, selection) pair into a `GroupCreationResult`.
//!
//! # Invariants
//! - Name is validated before selection; only one error surfaces per call.
//! - Submission never mutates the directory or the selection.

use crate::directory::Directory;
use crate::model::group::GroupCreationResult;
use crate::selection::SelectionSet;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-correctable reasons a group draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupValidationError {
    /// Group name is blank after trimming.
    EmptyName,
    /// No contact is selected.
    EmptySelection,
}

impl GroupValidationError {
    /// Stable machine-readable code for UI bindings.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptySelection => "empty_selection",
        }
    }

    /// User-facing prompt for this failure.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::EmptyName => "Vui lòng nhập tên nhóm",
            Self::EmptySelection => "Vui lòng chọn ít nhất một liên hệ",
        }
    }
}

impl Display for GroupValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "group name must not be empty"),
            Self::EmptySelection => write!(f, "at least one contact must be selected"),
        }
    }
}

impl Error for GroupValidationError {}

/// Validates a group draft and snapshots its members.
///
/// Selected ids missing from `directory` are ignored: they never become
/// members, and a selection made only of such ids counts as empty.
///
/// # Errors
/// - `EmptyName` when `name` is blank after trimming (checked first).
/// - `EmptySelection` when `selection.count() == 0`, or when none of its ids
///   resolve in `directory`.
pub fn submit(
    name: &str,
    selection: &SelectionSet,
    directory: &Directory,
) -> Result<GroupCreationResult, GroupValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        warn!("event=group_submit module=group status=rejected reason=empty_name");
        return Err(GroupValidationError::EmptyName);
    }
    if selection.is_empty() {
        warn!("event=group_submit module=group status=rejected reason=empty_selection");
        return Err(GroupValidationError::EmptySelection);
    }

    let members = selection.snapshot_in(directory);
    if members.is_empty() {
        warn!(
            "event=group_submit module=group status=rejected reason=unresolved_selection selected={}",
            selection.count()
        );
        return Err(GroupValidationError::EmptySelection);
    }

    let result = GroupCreationResult::new(trimmed.to_string(), members);
    info!(
        "event=group_submit module=group status=ok members={}",
        result.count()
    );
    Ok(result)
}
