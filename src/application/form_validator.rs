//! Form validator
//!
//! Ties a rule registry to a rendered form: live validation on blur, marker
//! clearing on input, and submission gating with a general error banner.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::app_config::{AppConfig, FormConfig};
use crate::domain::form::{FieldStatus, FormState, SubmitEvent, SubmitOutcome};
use crate::domain::validation::catalog::RuleCatalog;
use crate::domain::validation::field_validator::FieldValidator;
use crate::domain::validation::registry::{FieldRuleSet, RuleRegistry};
use crate::domain::validation::types::{FieldRef, ValidationOutcome};
use crate::infrastructure::adapters::timer::Timer;
use crate::infrastructure::view::{Document, FormView};
use crate::shared::logging::LoggingUtils;

/// Validation lifecycle for one form
///
/// An instance created for a container that does not exist is inert: it
/// accepts rules, reports every validation as passing and never renders.
pub struct FormValidator<V: FormView> {
    container_id: String,
    form: Option<V>,
    registry: RuleRegistry,
    catalog: RuleCatalog,
    statuses: HashMap<String, FieldStatus>,
    general_error_message: String,
    banner_dismiss: Duration,
    timer: Arc<dyn Timer>,
}

impl<V> FormValidator<V>
where
    V: FormView + Clone + Send + 'static,
{
    /// Attach to the form `container_id` of `document`
    pub fn new<D>(document: &D, container_id: &str, config: &AppConfig, timer: Arc<dyn Timer>) -> Self
    where
        D: Document<Form = V>,
    {
        let form = document.find_form(container_id);
        if form.is_none() {
            warn!(container = %container_id, "Form container not found, validator is inert");
        }

        Self::from_parts(container_id, form, &config.form, timer).with_catalog(RuleCatalog::from(config))
    }

    /// Build directly from a form handle, `None` giving an inert validator.
    ///
    /// Rules built through [`FormValidator::catalog`] use the default messages
    /// until [`FormValidator::with_catalog`] replaces them.
    pub fn from_parts(container_id: &str, form: Option<V>, config: &FormConfig, timer: Arc<dyn Timer>) -> Self {
        Self {
            container_id: container_id.to_string(),
            form,
            registry: RuleRegistry::new(),
            catalog: RuleCatalog::default(),
            statuses: HashMap::new(),
            general_error_message: config.general_error_message.clone(),
            banner_dismiss: config.banner_dismiss(),
            timer,
        }
    }

    /// Whether the validator is bound to a form
    pub fn is_attached(&self) -> bool {
        self.form.is_some()
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Register (or replace) the rules of a field
    pub fn add_rule(&mut self, field_id: impl Into<String>, rules: impl Into<FieldRuleSet>) -> &mut Self {
        self.registry.register(field_id, rules);
        self
    }

    /// Replace every rule set with the contents of `registry`
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use `catalog` for rules built through this validator
    pub fn with_catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Rule factory carrying the configured messages
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Status left by the last validation of the field
    pub fn field_status(&self, field_id: &str) -> FieldStatus {
        self.statuses.get(field_id).copied().unwrap_or_default()
    }

    /// Validate one field, render the result and return whether it passed
    pub fn validate_field(&mut self, field: &FieldRef) -> bool {
        self.check_field(field).valid
    }

    /// Validate every field of the form, in document order
    pub fn validate(&mut self) -> bool {
        self.validate_form().is_valid()
    }

    /// Validate every field and return the resulting snapshot
    pub fn validate_form(&mut self) -> FormState {
        let mut state = FormState::new();
        let fields = match &self.form {
            Some(form) => form.fields(),
            None => return state,
        };

        for field in fields {
            let outcome = self.check_field(&field);
            state.push(field, outcome);
        }

        state
    }

    /// Blur handler: revalidate the field
    pub fn on_blur(&mut self, field: &FieldRef) -> bool {
        self.validate_field(field)
    }

    /// Input handler: hide the error marker without revalidating.
    ///
    /// The field keeps its last status until the next blur or submit.
    pub fn on_input(&self, field: &FieldRef) {
        if let Some(form) = &self.form {
            form.clear_field_error(field);
        }
    }

    /// Submit handler: cancel the submission when any field fails
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        let state = self.validate_form();
        if state.is_valid() {
            return SubmitOutcome::Accepted;
        }

        event.prevent_default();
        LoggingUtils::log_submission_blocked(&self.container_id, &state.invalid_field_ids());

        let first_invalid = state.first_invalid().cloned();
        if let Some(form) = &self.form {
            form.show_general_error(&self.general_error_message);
            self.schedule_banner_removal(form.clone());

            if let Some(field) = &first_invalid {
                form.focus_field(field);
            }
        }

        SubmitOutcome::Blocked { state, first_invalid }
    }

    fn schedule_banner_removal(&self, form: V) {
        let container = self.container_id.clone();
        self.timer.schedule(
            self.banner_dismiss,
            Box::new(move || {
                debug!(container = %container, "Removing general error banner");
                form.remove_general_error();
            }),
        );
    }

    fn check_field(&mut self, field: &FieldRef) -> ValidationOutcome {
        let form = match &self.form {
            Some(form) => form,
            None => return ValidationOutcome::valid(),
        };

        let field_id = field.key();
        let rules = match self.registry.get(field_id) {
            Some(rules) => rules,
            None => return ValidationOutcome::valid(),
        };

        let value = form.value(field);
        form.clear_field_error(field);

        let outcome = FieldValidator::validate_rules(rules, &value, field);
        if let Some(message) = &outcome.message {
            form.show_field_error(field, message);
        }

        LoggingUtils::log_field_outcome(field_id, outcome.valid, outcome.message.as_deref());
        self.statuses.insert(field_id.to_string(), FieldStatus::from(&outcome));

        outcome
    }
}
