//! Form Validator - Declarative validation for form fields
//!
//! This library attaches ordered rule sets to form fields, validates them on
//! blur and submit, and drives a rendering layer that marks invalid fields and
//! shows a general error banner when a submission is blocked.
//!
//! ```
//! use form_validator::{AppConfig, FieldRef, FormValidator, ManualTimer, MemoryDocument, MemoryForm, RuleCatalog, SubmitEvent};
//! use std::sync::Arc;
//!
//! let form = MemoryForm::new("form-proveedor").with_field(FieldRef::named("email"), "not-an-email");
//! let document = MemoryDocument::new().with_form(form.clone());
//! let catalog = RuleCatalog::default();
//!
//! let mut validator = FormValidator::new(&document, "form-proveedor", &AppConfig::default(), Arc::new(ManualTimer::new()));
//! validator.add_rule("email", vec![catalog.required(None), catalog.email(None)]);
//!
//! let mut event = SubmitEvent::new();
//! assert!(!validator.handle_submit(&mut event).is_accepted());
//! assert_eq!(form.feedback(&FieldRef::named("email")).as_deref(), Some("Ingrese un email válido"));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::FormValidator;
pub use config::AppConfig;
pub use domain::{
    CatalogMessages, FieldRef, FieldRuleSet, FieldStatus, FieldValidator, FormSchema, FormState,
    PredicateRegistry, RuleCatalog, RuleDescriptor, RuleEngine, RuleKind, RuleRegistry,
    SubmitEvent, SubmitOutcome, ValidationOutcome,
};
pub use infrastructure::{
    Document, FormView, ManualTimer, MemoryDocument, MemoryForm, Timer, TokioTimer,
};
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
