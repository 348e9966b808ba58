//! Rule catalog
//!
//! Factories for well-formed [`RuleDescriptor`]s. Default messages come from a
//! [`CatalogMessages`] table (Spanish out of the box) so the text can be swapped
//! through configuration without touching rule registration code.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::types::{FieldPredicate, Predicate, RuleDescriptor, RuleKind};

/// Placeholder replaced by the rule bound in message templates
const VALUE_PLACEHOLDER: &str = "{value}";

/// Default message per rule kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CatalogMessages {
    #[validate(length(min = 1))]
    pub required: String,
    #[validate(length(min = 1))]
    pub email: String,
    /// Template, `{value}` is replaced by the length bound
    #[validate(length(min = 1))]
    pub min_length: String,
    /// Template, `{value}` is replaced by the length bound
    #[validate(length(min = 1))]
    pub max_length: String,
    #[validate(length(min = 1))]
    pub numeric: String,
    #[validate(length(min = 1))]
    pub decimal: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub ci: String,
    #[validate(length(min = 1))]
    pub ruc: String,
    #[validate(length(min = 1))]
    pub alphanumeric: String,
    /// Template, `{value}` is replaced by the numeric bound
    #[validate(length(min = 1))]
    pub min: String,
    /// Template, `{value}` is replaced by the numeric bound
    #[validate(length(min = 1))]
    pub max: String,
    #[validate(length(min = 1))]
    pub custom: String,
}

impl CatalogMessages {
    /// Spanish message table
    pub fn spanish() -> Self {
        Self {
            required: "Este campo es obligatorio".to_string(),
            email: "Ingrese un email válido".to_string(),
            min_length: "Mínimo {value} caracteres".to_string(),
            max_length: "Máximo {value} caracteres".to_string(),
            numeric: "Solo se permiten números".to_string(),
            decimal: "Ingrese un número válido (ej: 10.50)".to_string(),
            phone: "Ingrese un teléfono válido".to_string(),
            ci: "Cédula debe tener 10 dígitos".to_string(),
            ruc: "RUC debe tener 13 dígitos".to_string(),
            alphanumeric: "Solo letras, números y espacios".to_string(),
            min: "Valor mínimo: {value}".to_string(),
            max: "Valor máximo: {value}".to_string(),
            custom: "Valor inválido".to_string(),
        }
    }

    /// Templates that are expected to mention the bound
    pub(crate) fn templates(&self) -> [(&'static str, &str); 4] {
        [
            ("min_length", self.min_length.as_str()),
            ("max_length", self.max_length.as_str()),
            ("min", self.min.as_str()),
            ("max", self.max.as_str()),
        ]
    }
}

impl Default for CatalogMessages {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Render a bound the way a browser prints a number: `10`, `10.5`, `-3`,
/// switching to exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub(crate) fn format_bound(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

fn fill(template: &str, value: f64) -> String {
    template.replace(VALUE_PLACEHOLDER, &format_bound(value))
}

/// Factory for rule descriptors
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    messages: CatalogMessages,
}

impl RuleCatalog {
    pub fn new(messages: CatalogMessages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &CatalogMessages {
        &self.messages
    }

    pub fn required(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Required, message, self.messages.required.clone())
    }

    pub fn email(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Email, message, self.messages.email.clone())
    }

    /// Minimum trimmed length. The bound is not checked; negative values are kept.
    pub fn min_length(&self, length: i64, message: Option<&str>) -> RuleDescriptor {
        let default = fill(&self.messages.min_length, length as f64);
        RuleDescriptor::new(RuleKind::MinLength(length), message, default)
    }

    pub fn max_length(&self, length: i64, message: Option<&str>) -> RuleDescriptor {
        let default = fill(&self.messages.max_length, length as f64);
        RuleDescriptor::new(RuleKind::MaxLength(length), message, default)
    }

    pub fn numeric(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Numeric, message, self.messages.numeric.clone())
    }

    pub fn decimal(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Decimal, message, self.messages.decimal.clone())
    }

    pub fn phone(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Phone, message, self.messages.phone.clone())
    }

    pub fn ci(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Ci, message, self.messages.ci.clone())
    }

    pub fn ruc(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Ruc, message, self.messages.ruc.clone())
    }

    pub fn alphanumeric(&self, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Alphanumeric, message, self.messages.alphanumeric.clone())
    }

    pub fn min(&self, value: f64, message: Option<&str>) -> RuleDescriptor {
        let default = fill(&self.messages.min, value);
        RuleDescriptor::new(RuleKind::Min(value), message, default)
    }

    pub fn max(&self, value: f64, message: Option<&str>) -> RuleDescriptor {
        let default = fill(&self.messages.max, value);
        RuleDescriptor::new(RuleKind::Max(value), message, default)
    }

    pub fn custom(&self, predicate: impl FieldPredicate + 'static, message: Option<&str>) -> RuleDescriptor {
        self.custom_predicate(Predicate::new(predicate), message)
    }

    pub fn custom_predicate(&self, predicate: Predicate, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Custom(predicate), message, self.messages.custom.clone())
    }

    /// Rule whose kind this engine does not recognize
    pub fn unknown(&self, kind: &str, message: Option<&str>) -> RuleDescriptor {
        RuleDescriptor::new(RuleKind::Unknown(kind.to_string()), message, self.messages.custom.clone())
    }
}
