//! Field validation
//!
//! Rule descriptors, the catalog that builds them, the engine that applies
//! them and the per-field validator that runs a rule set in order.

pub mod catalog;
pub mod engine;
pub mod field_validator;
pub mod registry;
pub mod schema;
pub mod types;

pub use catalog::{CatalogMessages, RuleCatalog};
pub use engine::{parse_float_prefix, RuleEngine};
pub use field_validator::FieldValidator;
pub use registry::{FieldRuleSet, RuleRegistry};
pub use schema::{FieldSchema, FormSchema, PredicateRegistry, RuleSpec};
pub use types::{
    FieldPredicate,
    FieldRef,
    Predicate,
    RuleDescriptor,
    RuleKind,
    ValidationOutcome,
};
