//! Configuration management module
//!
//! This module handles all configuration concerns including loading,
//! validation, and providing access to settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, FormConfig, LoggingConfig, DEFAULT_BANNER_DISMISS_MS};
pub use validation::ConfigValidator;
