//! Form state model
//!
//! Snapshot of a form's validation, rebuilt on every full validation, plus the
//! per-field lifecycle status and the submit event handed in by the host.

use serde::{Deserialize, Serialize};

use super::validation::types::{FieldRef, ValidationOutcome};

/// Lifecycle of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldStatus {
    /// Never validated
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl From<&ValidationOutcome> for FieldStatus {
    fn from(outcome: &ValidationOutcome) -> Self {
        if outcome.valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// Outcome of one field inside a form snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub field: FieldRef,
    pub outcome: ValidationOutcome,
}

/// Validation snapshot of a whole form, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    fields: Vec<FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, field: FieldRef, outcome: ValidationOutcome) {
        self.fields.push(FieldState { field, outcome });
    }

    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|state| state.outcome.valid)
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Outcome of the first field with the given identifier
    pub fn outcome(&self, field_id: &str) -> Option<&ValidationOutcome> {
        self.fields
            .iter()
            .find(|state| state.field.key() == field_id)
            .map(|state| &state.outcome)
    }

    /// Failing fields in document order
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter().filter(|state| !state.outcome.valid)
    }

    /// Identifiers of the failing fields in document order
    pub fn invalid_field_ids(&self) -> Vec<String> {
        self.invalid_fields()
            .map(|state| state.field.key().to_string())
            .collect()
    }

    /// First failing field in document order
    pub fn first_invalid(&self) -> Option<&FieldRef> {
        self.invalid_fields().next().map(|state| &state.field)
    }
}

/// Submit event handed in by the host; cancelling it stops the submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of handling a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Submission cancelled; `first_invalid` received focus
    Blocked {
        state: FormState,
        first_invalid: Option<FieldRef>,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}
