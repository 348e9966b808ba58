//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use tracing::{debug, info, warn};

use crate::shared::error::AppError;

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    ///
    /// `RUST_LOG` takes precedence over `level`. `format` is either `text` or
    /// `json`; `structured` adds file and line information to text output.
    pub fn initialize(level: &str, format: &str, structured: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(structured)
            .with_line_number(structured)
            .with_ansi(false);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log the outcome of a single field validation
    pub fn log_field_outcome(field: &str, valid: bool, message: Option<&str>) {
        if valid {
            debug!(field = %field, "Field passed validation");
        } else {
            debug!(field = %field, message = message.unwrap_or_default(), "Field failed validation");
        }
    }

    /// Log a submission blocked by failed validation
    pub fn log_submission_blocked(container: &str, invalid_fields: &[String]) {
        info!(
            container = %container,
            invalid_count = invalid_fields.len(),
            invalid_fields = ?invalid_fields,
            "Form submission blocked"
        );
    }

    /// Log a rule kind the engine does not know and will let pass
    pub fn log_unknown_rule(field: &str, kind: &str) {
        warn!(
            field = %field,
            kind = %kind,
            "Unknown rule kind, the rule will always pass"
        );
    }
}
