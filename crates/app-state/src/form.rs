//! Sign-in form state
//!
//! A field-keyed record of current values plus a parallel record of
//! current errors, and the busy flag that guards against duplicate
//! submits. A field carries an error only as the result of the most
//! recent validation pass; editing a field clears that field's error
//! immediately and leaves every other field's error alone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation failure for a single field
///
/// These are expected user-input conditions. They are surfaced inline on
/// the field that produced them and never propagate past the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldError {
    /// The field is empty (after trimming, where the rule trims)
    #[error("This field is required")]
    Required,
    /// The value does not match the field's expected shape
    #[error("Enter a valid value")]
    Format,
}

/// Field-keyed form values and errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, FieldError>,
    #[serde(skip)]
    busy: bool,
}

impl FormState {
    /// Empty form, no errors, not busy
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field (empty string if never edited)
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Update a field's value and clear that field's error, if any
    ///
    /// Other fields' errors are untouched; re-validation is deferred to
    /// the next submit.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    /// All current values, for handing to the validator
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Current error on a field, if any
    pub fn error(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    /// All current inline errors
    pub fn errors(&self) -> &BTreeMap<String, FieldError> {
        &self.errors
    }

    /// Replace the error record with the result of a validation pass
    pub fn set_errors(&mut self, errors: BTreeMap<String, FieldError>) {
        self.errors = errors;
    }

    /// Whether any field currently carries an error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether a submit is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark a submit as in flight; returns `false` if one already is
    ///
    /// The caller must pair a successful call with [`FormState::finish_submit`].
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Clear the in-flight flag once the submit resolves
    pub fn finish_submit(&mut self) {
        self.busy = false;
    }
}
