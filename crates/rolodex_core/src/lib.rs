//! Core domain logic for rolodex.
//! This crate is the single source of truth for business invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod store;

pub use form::controller::{FormController, FormMode, SubmitOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    Field, FieldError, FieldValues, NilRecordId, RecordId, UserRecord, ValidationErrors, MOBILE_LEN,
};
pub use store::{MemoryStore, RecordStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
