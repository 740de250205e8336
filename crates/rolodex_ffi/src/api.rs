//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the record form and table state to Dart via FRB.
//! - Own the process-wide composition of store + form controller.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The UI renders exclusively from the state returned here; no record data
//!   lives on the Dart side.

use log::info;
use rolodex_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Field, FormController, MemoryStore, RecordId, RecordStore, SubmitOutcome, UserRecord,
};
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

#[derive(Default)]
struct App {
    store: MemoryStore,
    form: FormController,
}

static APP: OnceLock<Mutex<App>> = OnceLock::new();

fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> T {
    let mut guard = APP
        .get_or_init(|| Mutex::new(App::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

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
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with a different level or directory fail.
/// - Never panics; returns empty string on success and error text on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    /// Stable record ID in string form.
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: String,
    pub address: String,
}

/// One field-level validation message for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field label (`name|email|mobile|dob|address`).
    pub field: String,
    /// Human-readable message rendered next to the field.
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordActionResponse {
    /// Whether the operation was applied.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Submit response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmitResponse {
    /// Whether a record was added or updated.
    pub ok: bool,
    /// Affected record ID on success.
    pub record_id: Option<String>,
    /// Per-field validation messages on rejection.
    pub errors: Vec<FieldIssue>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Current form state, rendered directly by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStateResponse {
    /// Form mode label (`create|edit`).
    pub mode: String,
    /// ID of the record being edited, in edit mode only.
    pub editing_id: Option<String>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: String,
    pub address: String,
    /// Errors for touched fields only.
    pub errors: Vec<FieldIssue>,
}

/// Record table response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListResponse {
    /// Full collection in insertion order.
    pub records: Vec<RecordView>,
}

/// Returns the current form state for rendering.
///
/// # FFI contract
/// - Sync call, in-memory execution, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn form_state() -> FormStateResponse {
    with_app(|app| snapshot_form(&app.form))
}

/// Applies a controlled-input change to one form field.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown field labels are rejected without state changes.
#[flutter_rust_bridge::frb(sync)]
pub fn form_set_field(field: String, value: String) -> RecordActionResponse {
    let Some(field) = Field::parse(field.as_str()) else {
        return RecordActionResponse::failure(format!("unknown form field `{field}`"));
    };
    with_app(|app| {
        app.form.set_field(field, value);
        RecordActionResponse::success("Field updated.")
    })
}

/// Marks one form field as touched (blur handler).
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown field labels are rejected without state changes.
#[flutter_rust_bridge::frb(sync)]
pub fn form_blur_field(field: String) -> RecordActionResponse {
    let Some(field) = Field::parse(field.as_str()) else {
        return RecordActionResponse::failure(format!("unknown form field `{field}`"));
    };
    with_app(|app| {
        app.form.touch_field(field);
        RecordActionResponse::success("Field touched.")
    })
}

/// Submits the form in its current mode.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Validation failure returns per-field messages and dispatches nothing.
#[flutter_rust_bridge::frb(sync)]
pub fn form_submit() -> FormSubmitResponse {
    with_app(|app| match app.form.submit(&mut app.store) {
        SubmitOutcome::Added(id) => FormSubmitResponse {
            ok: true,
            record_id: Some(id.to_string()),
            errors: Vec::new(),
            message: "Record added.".to_string(),
        },
        SubmitOutcome::Updated(id) => FormSubmitResponse {
            ok: true,
            record_id: Some(id.to_string()),
            errors: Vec::new(),
            message: "Record updated.".to_string(),
        },
        SubmitOutcome::Rejected(errors) => FormSubmitResponse {
            ok: false,
            record_id: None,
            errors: to_field_issues(errors.iter()),
            message: "Validation failed.".to_string(),
        },
    })
}

/// Cancels an in-progress edit and returns the resulting form state.
///
/// # FFI contract
/// - Sync call, never panics.
/// - No-op outside edit mode.
#[flutter_rust_bridge::frb(sync)]
pub fn form_cancel() -> FormStateResponse {
    with_app(|app| {
        app.form.cancel_edit();
        snapshot_form(&app.form)
    })
}

/// Loads one record into the form for editing.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown or unparsable ids fail without state changes.
#[flutter_rust_bridge::frb(sync)]
pub fn record_begin_edit(id: String) -> RecordActionResponse {
    let Some(record_id) = parse_record_id(id.as_str()) else {
        return RecordActionResponse::failure(format!("invalid record id `{id}`"));
    };
    with_app(|app| {
        let Some(record) = app.store.get(record_id).cloned() else {
            return RecordActionResponse::failure(format!("unknown record id `{id}`"));
        };
        app.form.begin_edit(&record);
        RecordActionResponse::success("Editing record.")
    })
}

/// Deletes one record by id.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Deleting an absent record reports failure without state changes.
#[flutter_rust_bridge::frb(sync)]
pub fn record_delete(id: String) -> RecordActionResponse {
    let Some(record_id) = parse_record_id(id.as_str()) else {
        return RecordActionResponse::failure(format!("invalid record id `{id}`"));
    };
    with_app(|app| {
        if app.store.delete(record_id) {
            info!("event=record_delete module=ffi status=ok id={record_id}");
            RecordActionResponse::success("Record deleted.")
        } else {
            RecordActionResponse::failure(format!("unknown record id `{id}`"))
        }
    })
}

/// Returns the full record collection for the table view.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Rows arrive in insertion order; no filtering, no pagination.
#[flutter_rust_bridge::frb(sync)]
pub fn record_list() -> RecordListResponse {
    with_app(|app| RecordListResponse {
        records: app.store.records().iter().map(to_record_view).collect(),
    })
}

fn parse_record_id(raw: &str) -> Option<RecordId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn snapshot_form(form: &FormController) -> FormStateResponse {
    FormStateResponse {
        mode: form.mode().as_str().to_string(),
        editing_id: form.editing_id().map(|id| id.to_string()),
        name: form.value(Field::Name).to_string(),
        email: form.value(Field::Email).to_string(),
        mobile: form.value(Field::Mobile).to_string(),
        dob: form.value(Field::Dob).to_string(),
        address: form.value(Field::Address).to_string(),
        errors: to_field_issues(form.visible_errors().iter()),
    }
}

fn to_field_issues(
    errors: impl Iterator<Item = (Field, rolodex_core::FieldError)>,
) -> Vec<FieldIssue> {
    errors
        .map(|(field, error)| FieldIssue {
            field: field.as_str().to_string(),
            message: error.to_string(),
        })
        .collect()
}

fn to_record_view(record: &UserRecord) -> RecordView {
    RecordView {
        id: record.id.to_string(),
        name: record.name.clone(),
        email: record.email.clone(),
        mobile: record.mobile.clone(),
        dob: record.dob.clone(),
        address: record.address.clone(),
    }
}
