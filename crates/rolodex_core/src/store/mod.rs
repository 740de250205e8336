//! Record store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the transition contract consumed by the form controller and the
//!   UI boundary.
//! - Keep collection ordering and identifier uniqueness in one place.
//!
//! # Invariants
//! - Store operations are total: no error paths, no panics.
//! - The collection preserves insertion order; `update` replaces in place.

use crate::model::record::{FieldValues, RecordId, UserRecord};

pub mod memory;

pub use memory::MemoryStore;

/// Transition contract over the record collection.
///
/// The store is an explicitly owned value: the composition root creates it
/// and passes it by reference to whichever component needs it. There is no
/// process-global collection inside this crate.
pub trait RecordStore {
    /// Constructs a record with a freshly generated unique identifier from
    /// `values` and appends it. Returns the assigned identifier.
    fn add(&mut self, values: FieldValues) -> RecordId;

    /// Replaces the record whose identifier matches `record.id`, preserving
    /// its position. Returns `false` without changing the collection when no
    /// match exists.
    fn update(&mut self, record: UserRecord) -> bool;

    /// Removes the record with the matching identifier. Returns `false` when
    /// absent.
    fn delete(&mut self, id: RecordId) -> bool;

    /// Single-record read access.
    fn get(&self, id: RecordId) -> Option<&UserRecord>;

    /// The full ordered collection. No filtering, no pagination.
    fn records(&self) -> &[UserRecord];
}
