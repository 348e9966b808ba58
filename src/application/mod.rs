//! Application layer - Form lifecycle orchestration
//!
//! This module wires the domain validators to a rendered form and its events.

pub mod form_validator;

pub use form_validator::FormValidator;
