//! Declarative rule schemas
//!
//! Rule sets can be described in TOML or JSON instead of code:
//!
//! ```toml
//! [[fields]]
//! field = "email"
//! rules = [{ kind = "required" }, { kind = "email", message = "Correo inválido" }]
//!
//! [[fields]]
//! field = "codigo"
//! rules = [{ kind = "custom", predicate = "codigo_unico" }]
//! ```
//!
//! `custom` rules name a predicate registered in a [`PredicateRegistry`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::RuleCatalog;
use super::registry::{FieldRuleSet, RuleRegistry};
use super::types::{FieldPredicate, Predicate, RuleDescriptor};
use crate::shared::error::{AppError, AppResult};
use crate::shared::logging::LoggingUtils;

/// Named custom predicates available to schemas
#[derive(Debug, Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, predicate: impl FieldPredicate + 'static) -> &mut Self {
        self.predicates.insert(name.into(), Predicate::new(predicate));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }
}

/// One rule as written in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}

/// Rules of one field as written in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field: String,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// A whole form's rule sets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn from_toml_str(input: &str) -> AppResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build a rule registry. Later entries for the same field replace earlier ones.
    pub fn build(&self, catalog: &RuleCatalog, predicates: &PredicateRegistry) -> AppResult<RuleRegistry> {
        let mut registry = RuleRegistry::new();

        for field in &self.fields {
            let rules = field
                .rules
                .iter()
                .map(|spec| build_rule(&field.field, spec, catalog, predicates))
                .collect::<AppResult<FieldRuleSet>>()?;
            registry.register(field.field.clone(), rules);
        }

        Ok(registry)
    }
}

fn build_rule(
    field: &str,
    spec: &RuleSpec,
    catalog: &RuleCatalog,
    predicates: &PredicateRegistry,
) -> AppResult<RuleDescriptor> {
    let message = spec.message.as_deref();
    let bound = || {
        spec.value.ok_or_else(|| AppError::Schema {
            field: field.to_string(),
            reason: format!("rule '{}' requires a value", spec.kind),
        })
    };

    let rule = match spec.kind.as_str() {
        "required" => catalog.required(message),
        // A fractional length bound behaves like the nearest integer on the passing side
        "minLength" => catalog.min_length(bound()?.ceil() as i64, message),
        "maxLength" => catalog.max_length(bound()?.floor() as i64, message),
        "email" => catalog.email(message),
        "numeric" => catalog.numeric(message),
        "decimal" => catalog.decimal(message),
        "phone" => catalog.phone(message),
        "ci" => catalog.ci(message),
        "ruc" => catalog.ruc(message),
        "alphanumeric" => catalog.alphanumeric(message),
        "min" => catalog.min(bound()?, message),
        "max" => catalog.max(bound()?, message),
        "custom" => {
            let name = spec.predicate.as_deref().ok_or_else(|| AppError::Schema {
                field: field.to_string(),
                reason: "custom rule requires a predicate name".to_string(),
            })?;
            let predicate = predicates
                .get(name)
                .ok_or_else(|| AppError::UnknownPredicate(name.to_string()))?;
            catalog.custom_predicate(predicate.clone(), message)
        }
        other => {
            LoggingUtils::log_unknown_rule(field, other);
            catalog.unknown(other, message)
        }
    };

    Ok(rule)
}
