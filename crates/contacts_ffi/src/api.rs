//! FFI use-case API for the mobile contacts screens.
//!
//! # Responsibility
//! - Expose sync, use-case-level functions to Dart via FRB.
//! - Hold the single live group-creation session for the host app.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - At most one group session is live; starting a new one replaces it.
//! - Return values are UTF-8 strings or plain envelopes with stable meaning.

use contacts_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Contact, ContactId, ContactRow, ContactSource, Directory, GroupSession, InMemoryContactSource,
    SelectionOutcome,
};
use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

const NO_SESSION_MESSAGE: &str = "no active group session";

static GROUP_SESSION: Lazy<Mutex<Option<GroupSession>>> = Lazy::new(|| Mutex::new(None));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects the build default (`debug` in debug builds, `info` in release).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Contact row as rendered by list screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub contact_id: i64,
    pub name: String,
    pub phone_number: String,
    /// `None` hides the email line.
    pub email: Option<String>,
    /// Placeholder avatar letter.
    pub initial: String,
    pub has_profile_image: bool,
    /// Always `false` outside a group session.
    pub selected: bool,
}

/// List response for browse and search flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    pub ok: bool,
    pub items: Vec<ContactItem>,
    pub message: String,
}

/// Selection state after any selection-changing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResponse {
    pub ok: bool,
    pub selected_count: u32,
    /// Drives the create button enabled state.
    pub can_submit: bool,
    /// Selected-count label, or the failure reason when `ok == false`.
    pub message: String,
}

/// Group submission response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSubmitResponse {
    pub ok: bool,
    pub group_name: Option<String>,
    pub member_count: u32,
    pub member_ids: Vec<i64>,
    /// `empty_name`, `empty_selection` or `no_session` on failure.
    pub error_code: Option<String>,
    pub message: String,
}

impl GroupSubmitResponse {
    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            group_name: None,
            member_count: 0,
            member_ids: Vec::new(),
            error_code: Some(code.to_string()),
            message: message.into(),
        }
    }
}

/// Searches the contact directory for the browse screen.
///
/// # FFI contract
/// - Blank query returns every contact in display order.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_search(query: String) -> ContactListResponse {
    let directory = match Directory::from_contacts(contact_source().load_contacts()) {
        Ok(directory) => directory,
        Err(err) => {
            return ContactListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("contacts_search failed: {err}"),
            };
        }
    };

    let items = directory
        .filter_str(query.as_str())
        .into_iter()
        .map(|contact| to_contact_item(contact, false))
        .collect::<Vec<_>>();
    list_response(items)
}

/// Starts a fresh group-creation session over the current contacts.
///
/// Replaces any previous session; nothing is selected afterwards.
#[flutter_rust_bridge::frb(sync)]
pub fn group_session_start() -> SelectionResponse {
    match GroupSession::start_from(&contact_source()) {
        Ok(session) => {
            let response = selection_response(&session);
            *lock_session() = Some(session);
            response
        }
        Err(err) => selection_failure(format!("group_session_start failed: {err}")),
    }
}

/// Ends the live group session, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn group_session_end() {
    lock_session().take();
}

/// Searches inside the live group session, with selection flags.
#[flutter_rust_bridge::frb(sync)]
pub fn group_search(query: String) -> ContactListResponse {
    let guard = lock_session();
    let Some(session) = guard.as_ref() else {
        return ContactListResponse {
            ok: false,
            items: Vec::new(),
            message: NO_SESSION_MESSAGE.to_string(),
        };
    };

    let items = session
        .search(Some(query.as_str()))
        .into_iter()
        .map(row_to_item)
        .collect::<Vec<_>>();
    list_response(items)
}

/// Sets the checkbox state of one contact.
///
/// Unknown ids leave the selection unchanged and return `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn group_toggle(contact_id: i64, selected: bool) -> SelectionResponse {
    with_session(|session| match session.toggle(ContactId::from(contact_id), selected) {
        SelectionOutcome::UnknownContact(id) => {
            let mut response = selection_response(session);
            response.ok = false;
            response.message = format!("unknown contact: {id}");
            response
        }
        SelectionOutcome::Changed | SelectionOutcome::Unchanged => selection_response(session),
    })
}

/// Selects every contact in the live session.
#[flutter_rust_bridge::frb(sync)]
pub fn group_select_all() -> SelectionResponse {
    with_session(|session| {
        session.select_all();
        selection_response(session)
    })
}

/// Clears the selection of the live session.
#[flutter_rust_bridge::frb(sync)]
pub fn group_deselect_all() -> SelectionResponse {
    with_session(|session| {
        session.deselect_all();
        selection_response(session)
    })
}

/// Validates and submits the group draft.
///
/// # FFI contract
/// - Name is checked before selection; one error per call.
/// - The session is kept on success so the caller decides when to end it.
#[flutter_rust_bridge::frb(sync)]
pub fn group_submit(name: String) -> GroupSubmitResponse {
    let guard = lock_session();
    let Some(session) = guard.as_ref() else {
        return GroupSubmitResponse::failure("no_session", NO_SESSION_MESSAGE);
    };

    match session.submit(name.as_str()) {
        Ok(result) => GroupSubmitResponse {
            ok: true,
            group_name: Some(result.name().to_string()),
            member_count: saturating_u32(result.count()),
            member_ids: result.member_ids().into_iter().map(|id| id.0).collect(),
            error_code: None,
            message: result.confirmation_message(),
        },
        Err(err) => GroupSubmitResponse::failure(err.code(), err.user_message()),
    }
}

/// Whether leaving the group screen should ask for confirmation.
///
/// Returns `false` when no session is live.
#[flutter_rust_bridge::frb(sync)]
pub fn group_has_pending_input(name_draft: String) -> bool {
    lock_session()
        .as_ref()
        .is_some_and(|session| session.has_pending_input(name_draft.as_str()))
}

fn contact_source() -> InMemoryContactSource {
    InMemoryContactSource::sample()
}

fn lock_session() -> MutexGuard<'static, Option<GroupSession>> {
    GROUP_SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn with_session(f: impl FnOnce(&mut GroupSession) -> SelectionResponse) -> SelectionResponse {
    let mut guard = lock_session();
    match guard.as_mut() {
        Some(session) => f(session),
        None => selection_failure(NO_SESSION_MESSAGE),
    }
}

fn selection_response(session: &GroupSession) -> SelectionResponse {
    let count = session.selected_count();
    SelectionResponse {
        ok: true,
        selected_count: saturating_u32(count),
        can_submit: session.can_submit(),
        message: format!("Đã chọn: {count} liên hệ"),
    }
}

fn selection_failure(message: impl Into<String>) -> SelectionResponse {
    SelectionResponse {
        ok: false,
        selected_count: 0,
        can_submit: false,
        message: message.into(),
    }
}

fn list_response(items: Vec<ContactItem>) -> ContactListResponse {
    let message = if items.is_empty() {
        "No contacts.".to_string()
    } else {
        format!("Found {} contact(s).", items.len())
    };
    ContactListResponse {
        ok: true,
        items,
        message,
    }
}

fn row_to_item(row: ContactRow<'_>) -> ContactItem {
    to_contact_item(row.contact, row.selected)
}

fn to_contact_item(contact: &Contact, selected: bool) -> ContactItem {
    ContactItem {
        contact_id: contact.id.0,
        name: contact.name.clone(),
        phone_number: contact.phone_number.clone(),
        email: contact.display_email().map(str::to_string),
        initial: contact.initial().unwrap_or_default(),
        has_profile_image: contact.has_profile_image(),
        selected,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        contacts_search, core_version, group_deselect_all, group_has_pending_input,
        group_search, group_select_all, group_session_end, group_session_start, group_submit,
        group_toggle, init_logging, ping, GROUP_SESSION,
    };
    use std::sync::Mutex;

    // Tests share the process-wide session; run them one at a time.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> std::sync::MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_accepts_blank_level() {
        let error = init_logging("  ".to_string(), "tmp/logs".to_string());
        assert!(error.contains("absolute"), "{error}");
        assert!(!error.contains("unsupported log level"));
    }

    #[test]
    fn contacts_search_filters_by_phone() {
        let response = contacts_search("0901".to_string());
        assert!(response.ok);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].contact_id, 1);
        assert_eq!(response.items[0].initial, "N");

        let all = contacts_search("   ".to_string());
        assert_eq!(all.items.len(), 8);
    }

    #[test]
    fn calls_without_session_fail_softly() {
        let _guard = serial();
        group_session_end();

        let toggled = group_toggle(1, true);
        assert!(!toggled.ok);
        assert_eq!(toggled.message, "no active group session");

        let submitted = group_submit("Team".to_string());
        assert_eq!(submitted.error_code.as_deref(), Some("no_session"));
        assert!(!group_has_pending_input("draft".to_string()));
    }

    #[test]
    fn group_flow_selects_and_submits() {
        let _guard = serial();
        let started = group_session_start();
        assert!(started.ok);
        assert_eq!(started.selected_count, 0);
        assert!(!started.can_submit);

        let toggled = group_toggle(1, true);
        assert_eq!(toggled.selected_count, 1);
        assert!(toggled.can_submit);
        assert_eq!(toggled.message, "Đã chọn: 1 liên hệ");

        let rows = group_search("an".to_string());
        assert!(rows.items.iter().any(|item| item.contact_id == 1 && item.selected));

        let unknown = group_toggle(42, true);
        assert!(!unknown.ok);
        assert_eq!(unknown.selected_count, 1);

        let blank = group_submit("   ".to_string());
        assert_eq!(blank.error_code.as_deref(), Some("empty_name"));
        assert_eq!(blank.message, "Vui lòng nhập tên nhóm");

        let created = group_submit(" Friends ".to_string());
        assert!(created.ok, "{}", created.message);
        assert_eq!(created.group_name.as_deref(), Some("Friends"));
        assert_eq!(created.member_ids, vec![1]);
        assert_eq!(created.message, "Đã tạo nhóm 'Friends' với 1 thành viên");

        group_session_end();
        assert!(GROUP_SESSION.lock().unwrap().is_none());
    }

    #[test]
    fn restarting_session_replaces_previous_selection() {
        let _guard = serial();
        group_session_start();
        group_toggle(1, true);
        let before = group_toggle(3, true);
        assert_eq!(before.selected_count, 2);

        let restarted = group_session_start();
        assert!(restarted.ok);
        assert_eq!(restarted.selected_count, 0);
        assert!(!restarted.can_submit);

        let rows = group_search(String::new());
        assert_eq!(rows.items.len(), 8);
        assert!(rows.items.iter().all(|item| !item.selected));
        assert_eq!(
            group_submit("Team".to_string()).error_code.as_deref(),
            Some("empty_selection")
        );
        group_session_end();
    }

    #[test]
    fn select_all_then_deselect_all_empties_selection() {
        let _guard = serial();
        group_session_start();

        let all = group_select_all();
        assert_eq!(all.selected_count, 8);
        assert!(group_has_pending_input(String::new()));

        let none = group_deselect_all();
        assert_eq!(none.selected_count, 0);
        assert!(!none.can_submit);
        assert!(!group_has_pending_input("  ".to_string()));

        let rejected = group_submit("Team A".to_string());
        assert_eq!(rejected.error_code.as_deref(), Some("empty_selection"));
        group_session_end();
    }
}
