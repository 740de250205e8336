//! Record form controller.
//!
//! # Responsibility
//! - Drive the Create/Edit form state machine.
//! - Validate field values and dispatch add/update intents into a store.
//! - Track per-field touched state so errors stay quiet until a field was
//!   blurred or a submit was attempted.
//!
//! # Invariants
//! - A rejected submit changes no store state and keeps mode and values.
//! - A successful submit always returns the form to `Create` with cleared
//!   values and touched state.
//! - The edit snapshot's identifier is never altered by field edits.

use crate::model::record::{Field, FieldValues, RecordId, UserRecord, ValidationErrors};
use crate::store::RecordStore;
use log::{debug, info};

/// Form mode as observed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new record.
    Create,
    /// Submitting updates the record captured at edit entry.
    Edit,
}

impl FormMode {
    /// Stable lowercase label for the UI boundary and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit => "edit",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended under the returned identifier.
    Added(RecordId),
    /// An update was dispatched for the returned identifier.
    Updated(RecordId),
    /// Validation failed; nothing was dispatched.
    Rejected(ValidationErrors),
}

#[derive(Debug, Clone, Default)]
struct TouchedFields {
    name: bool,
    email: bool,
    mobile: bool,
    dob: bool,
    address: bool,
}

impl TouchedFields {
    fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Mobile => self.mobile,
            Field::Dob => self.dob,
            Field::Address => self.address,
        }
    }

    fn mark(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Mobile => self.mobile = true,
            Field::Dob => self.dob = true,
            Field::Address => self.address = true,
        }
    }

    fn mark_all(&mut self) {
        for field in Field::ALL {
            self.mark(field);
        }
    }
}

/// Controller for the add/edit record form.
///
/// Owns only transient form state; the record collection itself is owned by
/// the composition root and passed in at submit time.
#[derive(Debug, Default)]
pub struct FormController {
    values: FieldValues,
    touched: TouchedFields,
    /// Snapshot of the record being edited. `Some` is the Edit mode marker.
    editing: Option<UserRecord>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Identifier of the record being edited, in Edit mode only.
    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing.as_ref().map(|snapshot| snapshot.id)
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Controlled-input change handler.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Blur handler: marks `field` touched, making its errors visible.
    pub fn touch_field(&mut self, field: Field) {
        self.touched.mark(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(field)
    }

    /// Full validation report for the current values.
    pub fn errors(&self) -> ValidationErrors {
        self.values.validate().err().unwrap_or_default()
    }

    /// Validation report restricted to touched fields.
    ///
    /// # Contract
    /// - Untouched fields never surface errors, even when invalid.
    /// - After any submit attempt every field is touched, so the full report
    ///   becomes visible.
    pub fn visible_errors(&self) -> ValidationErrors {
        let mut errors = self.errors();
        errors.retain(|field| self.touched.get(field));
        errors
    }

    /// Enters Edit mode for `record`, loading its fields into the form.
    ///
    /// # Contract
    /// - Captures a snapshot of the record's pre-edit state.
    /// - Resets touched state; previously shown errors disappear.
    pub fn begin_edit(&mut self, record: &UserRecord) {
        debug!(
            "event=form_edit_begin module=form status=ok id={}",
            record.id
        );
        self.values = record.values();
        self.touched = TouchedFields::default();
        self.editing = Some(record.clone());
    }

    /// Leaves Edit mode, discarding the snapshot and all field values.
    ///
    /// No-op in Create mode: there is nothing to discard and typed values
    /// are kept.
    pub fn cancel_edit(&mut self) {
        if let Some(snapshot) = self.editing.take() {
            debug!(
                "event=form_edit_cancel module=form status=ok id={}",
                snapshot.id
            );
            self.reset();
        }
    }

    /// Validates the current values and, on success, dispatches into `store`.
    ///
    /// # Contract
    /// - Marks every field touched, valid or not.
    /// - Rejected: no dispatch, mode and values unchanged.
    /// - Create mode: dispatches `add`, stays in Create, clears the form.
    /// - Edit mode: merges values into the snapshot (identifier unchanged),
    ///   dispatches `update`, returns to Create, clears the form. A store
    ///   no-op (record deleted since edit entry) still counts as `Updated`.
    pub fn submit<S: RecordStore>(&mut self, store: &mut S) -> SubmitOutcome {
        self.touched.mark_all();

        if let Err(errors) = self.values.validate() {
            debug!(
                "event=form_submit module=form status=rejected mode={} error_count={}",
                self.mode().as_str(),
                errors.len()
            );
            return SubmitOutcome::Rejected(errors);
        }

        let values = std::mem::take(&mut self.values);
        match self.editing.take() {
            None => {
                let id = store.add(values);
                self.reset();
                info!("event=form_submit module=form status=ok action=add id={id}");
                SubmitOutcome::Added(id)
            }
            Some(snapshot) => {
                let record = snapshot.with_values(values);
                let id = record.id;
                let applied = store.update(record);
                self.reset();
                if applied {
                    info!("event=form_submit module=form status=ok action=update id={id}");
                } else {
                    debug!("event=form_submit module=form status=noop action=update id={id}");
                }
                SubmitOutcome::Updated(id)
            }
        }
    }

    fn reset(&mut self) {
        self.values = FieldValues::default();
        self.touched = TouchedFields::default();
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{FormController, FormMode};
    use crate::model::record::Field;

    #[test]
    fn new_controller_starts_in_create_mode_with_empty_fields() {
        let form = FormController::new();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.editing_id(), None);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
        }
    }

    #[test]
    fn errors_stay_hidden_until_field_is_touched() {
        let mut form = FormController::new();
        form.set_field(Field::Email, "not-an-email");

        assert!(form.errors().get(Field::Email).is_some());
        assert!(form.visible_errors().is_empty());

        form.touch_field(Field::Email);
        assert!(form.visible_errors().get(Field::Email).is_some());
    }

    #[test]
    fn cancel_in_create_mode_keeps_typed_values() {
        let mut form = FormController::new();
        form.set_field(Field::Name, "draft name");
        form.cancel_edit();
        assert_eq!(form.value(Field::Name), "draft name");
    }
}
