//! Domain model for user records and form field values.
//!
//! # Responsibility
//! - Define the canonical user record held by the record store.
//! - Define the editable field set, its validation rules and error shapes.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - Validation collects one error per failing field instead of stopping at
//!   the first failure.

pub mod record;
