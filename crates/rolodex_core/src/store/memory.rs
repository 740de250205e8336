//! Vec-backed record store.
//!
//! # Responsibility
//! - Hold the ordered record collection for one application instance.
//! - Apply add/update/delete transitions.
//!
//! # Invariants
//! - Identifiers are unique within the collection.
//! - `update` keeps the edited record at its original position.

use crate::model::record::{FieldValues, RecordId, UserRecord};
use crate::store::RecordStore;
use log::debug;
use uuid::Uuid;

/// In-memory record store backed by an insertion-ordered `Vec`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<UserRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl RecordStore for MemoryStore {
    fn add(&mut self, values: FieldValues) -> RecordId {
        let mut record = UserRecord::new(values);
        // A v4 draw colliding with an existing id is effectively impossible,
        // but uniqueness is a store invariant, so re-draw instead of trusting
        // the odds.
        while self.position(record.id).is_some() {
            record.id = Uuid::new_v4();
        }
        let id = record.id;
        self.records.push(record);
        debug!(
            "event=record_add module=store status=ok id={id} total={}",
            self.records.len()
        );
        id
    }

    fn update(&mut self, record: UserRecord) -> bool {
        match self.position(record.id) {
            Some(index) => {
                let id = record.id;
                self.records[index] = record;
                debug!("event=record_update module=store status=ok id={id} position={index}");
                true
            }
            None => {
                debug!(
                    "event=record_update module=store status=noop id={}",
                    record.id
                );
                false
            }
        }
    }

    fn delete(&mut self, id: RecordId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                debug!(
                    "event=record_delete module=store status=ok id={id} total={}",
                    self.records.len()
                );
                true
            }
            None => {
                debug!("event=record_delete module=store status=noop id={id}");
                false
            }
        }
    }

    fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn records(&self) -> &[UserRecord] {
        &self.records
    }
}
