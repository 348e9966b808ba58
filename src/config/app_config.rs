//! Application configuration structures
//!
//! This module contains the configuration structures for the form validator.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::validation::ConfigValidator;
use crate::domain::validation::catalog::{CatalogMessages, RuleCatalog};
use crate::shared::error::AppError;
use crate::shared::logging::LoggingUtils;

/// Default time the general error banner stays visible
pub const DEFAULT_BANNER_DISMISS_MS: u64 = 5000;

/// Form behaviour configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FormConfig {
    /// Banner text shown when a submission is blocked
    #[validate(length(min = 1))]
    pub general_error_message: String,

    /// Delay before the banner is removed (milliseconds)
    #[validate(range(max = 600000))]
    pub banner_dismiss_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            general_error_message: "Por favor, corrija los errores en el formulario".to_string(),
            banner_dismiss_ms: DEFAULT_BANNER_DISMISS_MS,
        }
    }
}

impl FormConfig {
    pub fn banner_dismiss(&self) -> Duration {
        Duration::from_millis(self.banner_dismiss_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(length(min = 1))]
    pub format: String,

    /// Include file and line information
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            structured: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Form behaviour
    #[validate(nested)]
    pub form: FormConfig,

    /// Default rule messages
    #[validate(nested)]
    pub messages: CatalogMessages,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Reads an optional `FormValidator.{toml,json,yaml}` file, then
    /// `FORM_VALIDATOR__SECTION__KEY` environment variables.
    pub fn load() -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("FormValidator").required(false))
            .add_source(config::Environment::with_prefix("FORM_VALIDATOR").separator("__"));

        Self::from_builder(builder)
    }

    /// Load configuration from a TOML document
    pub fn from_toml_str(input: &str) -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(input, config::FileFormat::Toml));

        Self::from_builder(builder)
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> crate::Result<Self> {
        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> crate::Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        ConfigValidator::validate_config(self)
    }

    /// Install the global tracing subscriber described by the logging section
    pub fn init_logging(&self) -> crate::Result<()> {
        LoggingUtils::initialize(&self.logging.level, &self.logging.format, self.logging.structured)
    }
}

impl From<&AppConfig> for RuleCatalog {
    fn from(config: &AppConfig) -> Self {
        RuleCatalog::new(config.messages.clone())
    }
}
