use super::engine::{self, RuleEngine};
use super::registry::{FieldRuleSet, RuleRegistry};
use super::types::{FieldRef, ValidationOutcome};

/// Validates one field against its registered rule set
pub struct FieldValidator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> FieldValidator<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Validate `value` for `field_id`. Fields without rules are always valid.
    pub fn validate_field(&self, field_id: &str, value: &str, field: &FieldRef) -> ValidationOutcome {
        match self.registry.get(field_id) {
            Some(rules) => Self::validate_rules(rules, value, field),
            None => ValidationOutcome::valid(),
        }
    }

    /// Run `rules` in order over the trimmed value, stopping at the first failure
    pub fn validate_rules(rules: &FieldRuleSet, value: &str, field: &FieldRef) -> ValidationOutcome {
        let value = engine::trim(value);

        rules
            .rules()
            .iter()
            .find(|rule| !RuleEngine::apply(value, rule, field))
            .map(|rule| ValidationOutcome::invalid(rule.message()))
            .unwrap_or_else(ValidationOutcome::valid)
    }
}
