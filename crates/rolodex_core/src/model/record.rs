//! User record domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, form and UI boundary.
//! - Define per-field validation for user-entered values.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `FieldValues::validate` reports every failing field, at most one error
//!   per field, in `Field::ALL` order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every user record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Required length of the mobile field, in digits.
pub const MOBILE_LEN: usize = 10;

// Intentionally loose: one `@`, no whitespace, and a dot in the domain part.
// Full RFC 5322 matching is not a goal for an entry form.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// The five editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Mobile,
    Dob,
    Address,
}

impl Field {
    /// All fields in declaration order. Validation and error reporting
    /// iterate in this order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Mobile,
        Field::Dob,
        Field::Address,
    ];

    /// Stable lowercase label used in error surfaces, log events and the
    /// UI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Dob => "dob",
            Field::Address => "address",
        }
    }

    /// Parses a field label produced by `as_str`.
    pub fn parse(value: &str) -> Option<Field> {
        match value {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "mobile" => Some(Field::Mobile),
            "dob" => Some(Field::Dob),
            "address" => Some(Field::Address),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty (whitespace-only counts as empty).
    Required,
    /// Email value does not look like an email address.
    InvalidEmail,
    /// Mobile value has the wrong length.
    MobileLength { actual: usize },
    /// Mobile value contains a non-digit character.
    MobileNonDigit,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::InvalidEmail => write!(f, "invalid email address"),
            Self::MobileLength { actual } => write!(
                f,
                "must be exactly {MOBILE_LEN} digits, got {actual} characters"
            ),
            Self::MobileNonDigit => write!(f, "must contain only digits"),
        }
    }
}

impl Error for FieldError {}

/// Per-field validation report.
///
/// Holds at most one error per field, ordered by `Field::ALL`. Empty reports
/// are never constructed by `FieldValues::validate`; it returns `Ok(())`
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    entries: Vec<(Field, FieldError)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.entries
            .iter()
            .find(|(entry_field, _)| *entry_field == field)
            .map(|(_, error)| *error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.entries.iter().copied()
    }

    /// Drops entries whose field does not satisfy `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.entries.retain(|(field, _)| keep(*field));
    }

    fn push(&mut self, field: Field, error: FieldError) {
        self.entries.push((field, error));
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "no validation errors");
        }
        for (index, (field, error)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Error for caller-provided record identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NilRecordId;

impl Display for NilRecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "record id must not be the nil uuid")
    }
}

impl Error for NilRecordId {}

/// The five editable field values as entered in the form.
///
/// This is the draft shape the form controller edits; it carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: String,
    pub address: String,
}

impl FieldValues {
    /// Returns the current value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Dob => &self.dob,
            Field::Address => &self.address,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Mobile => self.mobile = value,
            Field::Dob => self.dob = value,
            Field::Address => self.address = value,
        }
    }

    /// Validates all fields against the form schema.
    ///
    /// # Contract
    /// - Every field is required; whitespace-only values count as empty.
    /// - `email` must match email syntax.
    /// - `mobile` must be exactly `MOBILE_LEN` ASCII digits.
    /// - Failures are collected per field, not short-circuited.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in Field::ALL {
            if let Some(error) = self.field_error(field) {
                errors.push(field, error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn field_error(&self, field: Field) -> Option<FieldError> {
        let value = self.get(field);
        if value.trim().is_empty() {
            return Some(FieldError::Required);
        }

        match field {
            Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::InvalidEmail),
            Field::Mobile => {
                let length = value.chars().count();
                if length != MOBILE_LEN {
                    Some(FieldError::MobileLength { actual: length })
                } else if !value.chars().all(|ch| ch.is_ascii_digit()) {
                    Some(FieldError::MobileNonDigit)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Canonical user record: stable identity plus the five editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable global ID used for edit/delete targeting.
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: String,
    pub address: String,
}

impl UserRecord {
    /// Creates a record with a freshly generated stable ID.
    pub fn new(values: FieldValues) -> Self {
        Self::assemble(Uuid::new_v4(), values)
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    ///
    /// # Errors
    /// - Rejects the nil uuid; nil is reserved as "no identity".
    pub fn with_id(id: RecordId, values: FieldValues) -> Result<Self, NilRecordId> {
        if id.is_nil() {
            return Err(NilRecordId);
        }
        Ok(Self::assemble(id, values))
    }

    /// Projects the editable fields back into a `FieldValues` draft.
    ///
    /// Used when a record enters edit mode.
    pub fn values(&self) -> FieldValues {
        FieldValues {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            dob: self.dob.clone(),
            address: self.address.clone(),
        }
    }

    /// Returns a copy of this record with every editable field replaced and
    /// the identifier preserved.
    pub fn with_values(&self, values: FieldValues) -> Self {
        Self::assemble(self.id, values)
    }

    fn assemble(id: RecordId, values: FieldValues) -> Self {
        Self {
            id,
            name: values.name,
            email: values.email,
            mobile: values.mobile,
            dob: values.dob,
            address: values.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldError, FieldValues};

    fn valid_values() -> FieldValues {
        FieldValues {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            mobile: "1234567890".to_string(),
            dob: "2000-01-01".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn valid_values_pass() {
        assert!(valid_values().validate().is_ok());
    }

    #[test]
    fn empty_fields_are_all_required() {
        let errors = FieldValues::default().validate().unwrap_err();
        assert_eq!(errors.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut values = valid_values();
        values.name = "   ".to_string();
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut values = valid_values();
        values.email = "jane.x.com".to_string();
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        let mut values = valid_values();
        values.email = "jane@host".to_string();
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn short_mobile_reports_length() {
        let mut values = valid_values();
        values.mobile = "12345".to_string();
        let errors = values.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Mobile),
            Some(FieldError::MobileLength { actual: 5 })
        );
    }

    #[test]
    fn ten_char_mobile_with_letters_is_rejected() {
        let mut values = valid_values();
        values.mobile = "12345abcde".to_string();
        let errors = values.validate().unwrap_err();
        assert_eq!(errors.get(Field::Mobile), Some(FieldError::MobileNonDigit));
    }

    #[test]
    fn mobile_length_counts_chars_not_bytes() {
        let mut values = valid_values();
        values.mobile = "１２３４５６７８９０".to_string();
        let errors = values.validate().unwrap_err();
        // Fullwidth digits: length MOBILE_LEN in chars, still not ASCII digits.
        assert_eq!(errors.get(Field::Mobile), Some(FieldError::MobileNonDigit));
    }

    #[test]
    fn errors_follow_field_declaration_order() {
        let mut values = valid_values();
        values.address = String::new();
        values.email = "broken".to_string();
        let errors = values.validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Address]);
    }

    #[test]
    fn field_labels_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("phone"), None);
    }
}
