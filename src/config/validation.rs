//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{AppConfig, LoggingConfig};
use crate::domain::validation::catalog::CatalogMessages;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)?;
        Self::check_message_templates(&config.messages);

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        if !LOG_FORMATS.contains(&logging.format.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }

    /// Templates without a `{value}` placeholder are allowed but probably a mistake
    fn check_message_templates(messages: &CatalogMessages) {
        for (name, template) in messages.templates() {
            if !template.contains("{value}") {
                tracing::warn!(
                    template_name = %name,
                    template = %template,
                    "Message template does not reference {{value}}; the bound will not be shown"
                );
            }
        }
    }
}
