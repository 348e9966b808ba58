//! Error handling module
//!
//! This module provides centralized error handling for the crate. Rule
//! failures and blocked submissions are outcomes, not errors; the variants
//! here cover configuration, schema loading and runtime wiring only.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid rule schema for field {field}: {reason}")]
    Schema { field: String, reason: String },

    #[error("Unknown custom predicate: {0}")]
    UnknownPredicate(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error came from user supplied configuration or schema
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::Validation(_)
                | AppError::Schema { .. }
                | AppError::UnknownPredicate(_)
                | AppError::Json(_)
        )
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
