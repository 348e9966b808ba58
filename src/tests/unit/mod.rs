//! Unit tests for the validation core
//!
//! This module covers the rule engine and field validator properties the
//! rest of the crate relies on.

use crate::{
    domain::validation::{
        catalog::RuleCatalog,
        engine::RuleEngine,
        field_validator::FieldValidator,
        registry::{FieldRuleSet, RuleRegistry},
        types::{FieldRef, RuleDescriptor, ValidationOutcome},
    },
    tests::config,
};

fn passes(value: &str, rule: &RuleDescriptor) -> bool {
    RuleEngine::apply(value, rule, &FieldRef::named("campo"))
}

/// Rule engine unit tests
pub mod engine {
    use super::*;

    #[test]
    fn test_rules_are_deterministic() {
        let catalog = RuleCatalog::default();
        let rules = [
            catalog.required(None),
            catalog.min_length(2, None),
            catalog.max_length(8, None),
            catalog.email(None),
            catalog.numeric(None),
            catalog.decimal(None),
            catalog.phone(None),
            catalog.ci(None),
            catalog.ruc(None),
            catalog.alphanumeric(None),
        ];
        let values = ["", "a", "12", "10.50", "ana@example.com", "0991234567", "texto libre"];

        for rule in &rules {
            for value in values {
                assert_eq!(passes(value, rule), passes(value, rule), "{} on {:?}", rule.kind().name(), value);
            }
        }
    }

    #[test]
    fn test_required() {
        let rule = RuleCatalog::default().required(None);
        assert!(!passes("", &rule));
        assert!(passes("x", &rule));
    }

    #[test]
    fn test_ci_length() {
        let rule = RuleCatalog::default().ci(None);
        assert!(passes("0102030405", &rule));
        assert!(!passes("123456789", &rule));
        assert!(!passes("12345678901", &rule));
    }

    #[test]
    fn test_ruc_length() {
        let rule = RuleCatalog::default().ruc(None);
        assert!(passes("0102030405001", &rule));
        assert!(!passes("010203040500", &rule));
        assert!(!passes("01020304050011", &rule));
    }

    #[test]
    fn test_decimal() {
        let rule = RuleCatalog::default().decimal(None);
        assert!(passes("10.50", &rule));
        assert!(!passes("10.555", &rule));
        assert!(passes("10", &rule));
        assert!(!passes("abc", &rule));
    }

    #[test]
    fn test_min_bound() {
        let rule = RuleCatalog::default().min(10.0, None);
        assert!(!passes("5", &rule));
        assert!(passes("15", &rule));
    }

    #[test]
    fn test_max_bound() {
        let rule = RuleCatalog::default().max(10.0, None);
        assert!(passes("5", &rule));
        assert!(!passes("15", &rule));
    }
}

/// Field validator unit tests
pub mod field {
    use super::*;

    #[test]
    fn test_short_circuit_reports_first_rule() {
        config::init();
        let catalog = RuleCatalog::default();
        let rules: FieldRuleSet = vec![catalog.required(None), catalog.min_length(5, None)].into();

        let outcome = FieldValidator::validate_rules(&rules, "", &FieldRef::named("nombre"));
        assert_eq!(outcome.message.as_deref(), Some("Este campo es obligatorio"));
    }

    #[test]
    fn test_unregistered_field_always_valid() {
        let registry = RuleRegistry::new();
        let validator = FieldValidator::new(&registry);
        for value in ["", "   ", "cualquier cosa", "!!!"] {
            assert_eq!(
                validator.validate_field("sin_reglas", value, &FieldRef::named("sin_reglas")),
                ValidationOutcome::valid()
            );
        }
    }

    #[test]
    fn test_custom_message_reported() {
        let catalog = RuleCatalog::default();
        let mut registry = RuleRegistry::new();
        registry.register("stock", vec![catalog.numeric(Some("El stock debe ser un entero"))]);

        let outcome = FieldValidator::new(&registry).validate_field("stock", "1.5", &FieldRef::named("stock"));
        assert_eq!(outcome, ValidationOutcome::invalid("El stock debe ser un entero"));
    }
}
