use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Handle to a form field as seen by rules and collaborators.
///
/// The engine never interprets it; it is only passed through to custom
/// predicates and the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl FieldRef {
    /// Field known by its `name` attribute
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), id: None }
    }

    /// Field known by its `id` attribute
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { name: None, id: Some(id.into()) }
    }

    /// Identifier used to look up rules: the name, falling back to the id.
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.id.as_deref())
            .unwrap_or_default()
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Caller supplied check used by `custom` rules
pub trait FieldPredicate: Send + Sync {
    fn evaluate(&self, value: &str, field: &FieldRef) -> bool;
}

impl<F> FieldPredicate for F
where
    F: Fn(&str, &FieldRef) -> bool + Send + Sync,
{
    fn evaluate(&self, value: &str, field: &FieldRef) -> bool {
        self(value, field)
    }
}

/// Shared, cloneable custom predicate
#[derive(Clone)]
pub struct Predicate(Arc<dyn FieldPredicate>);

impl Predicate {
    pub fn new(predicate: impl FieldPredicate + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn evaluate(&self, value: &str, field: &FieldRef) -> bool {
        self.0.evaluate(value, field)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Rule kinds, with the bound or predicate each kind compares against
#[derive(Debug, Clone)]
pub enum RuleKind {
    Required,
    MinLength(i64),
    MaxLength(i64),
    Email,
    Numeric,
    Decimal,
    Phone,
    Ci,
    Ruc,
    Alphanumeric,
    Min(f64),
    Max(f64),
    Custom(Predicate),
    /// Kind name not understood by this engine; always passes
    Unknown(String),
}

impl RuleKind {
    /// Name of the kind as used in rule schemas
    pub fn name(&self) -> &str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength(_) => "minLength",
            RuleKind::MaxLength(_) => "maxLength",
            RuleKind::Email => "email",
            RuleKind::Numeric => "numeric",
            RuleKind::Decimal => "decimal",
            RuleKind::Phone => "phone",
            RuleKind::Ci => "ci",
            RuleKind::Ruc => "ruc",
            RuleKind::Alphanumeric => "alphanumeric",
            RuleKind::Min(_) => "min",
            RuleKind::Max(_) => "max",
            RuleKind::Custom(_) => "custom",
            RuleKind::Unknown(name) => name.as_str(),
        }
    }

    /// Numeric bound carried by the kind, if any
    pub fn bound(&self) -> Option<f64> {
        match self {
            RuleKind::MinLength(n) | RuleKind::MaxLength(n) => Some(*n as f64),
            RuleKind::Min(v) | RuleKind::Max(v) => Some(*v),
            _ => None,
        }
    }
}

/// A single rule bound to a message. Immutable once built.
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    kind: RuleKind,
    message: String,
}

impl RuleDescriptor {
    /// Build a descriptor. An empty message falls back to `default_message`.
    pub(crate) fn new(kind: RuleKind, message: Option<&str>, default_message: String) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => default_message,
        };
        Self { kind, message }
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self { valid: true, message: None }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self { valid: false, message: Some(message.into()) }
    }
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::valid()
    }
}
