//! Domain layer - Core validation logic and domain models
//!
//! This module contains the rule engine and the form state model. It is
//! independent of any rendering or scheduling concern.

pub mod form;
pub mod validation;

pub use form::{FieldState, FieldStatus, FormState, SubmitEvent, SubmitOutcome};
pub use validation::{
    CatalogMessages, FieldRef, FieldRuleSet, FieldValidator, FormSchema, PredicateRegistry,
    RuleCatalog, RuleDescriptor, RuleEngine, RuleKind, RuleRegistry, ValidationOutcome,
};
