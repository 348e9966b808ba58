//! Common test utilities and fixtures
//!
//! This module provides shared forms, rule sets and assertions used across
//! all test modules.

/// Test fixtures for common test data
pub mod fixtures {
    use crate::domain::validation::catalog::RuleCatalog;
    use crate::domain::validation::types::FieldRef;
    use crate::infrastructure::adapters::memory_form::{MemoryDocument, MemoryForm};

    pub const SUPPLIER_FORM: &str = "form-proveedor";

    /// Supplier form fields, in document order
    pub fn supplier_fields() -> Vec<FieldRef> {
        vec![
            FieldRef::named("razon_social"),
            FieldRef::named("ruc"),
            FieldRef::named("email"),
            FieldRef::named("telefono"),
            FieldRef::with_id("observaciones"),
        ]
    }

    /// Supplier form with every field valid
    pub fn valid_supplier_form() -> MemoryForm {
        let values = [
            "Distribuidora Andina",
            "1790012345001",
            "ventas@andina.ec",
            "(02) 245-6789",
            "",
        ];

        supplier_fields()
            .into_iter()
            .zip(values)
            .fold(MemoryForm::new(SUPPLIER_FORM), |form, (field, value)| form.with_field(field, value))
    }

    pub fn document_with(form: &MemoryForm) -> MemoryDocument {
        MemoryDocument::new().with_form(form.clone())
    }

    /// Rules of the supplier form as registered by the inventory screens
    pub fn supplier_rules(catalog: &RuleCatalog) -> Vec<(&'static str, Vec<crate::domain::RuleDescriptor>)> {
        vec![
            ("razon_social", vec![catalog.required(None), catalog.min_length(3, None), catalog.max_length(120, None)]),
            ("ruc", vec![catalog.required(None), catalog.ruc(None)]),
            ("email", vec![catalog.required(None), catalog.email(None)]),
            ("telefono", vec![catalog.phone(None)]),
        ]
    }
}

/// Custom assertions for form state
pub mod assertions {
    use crate::domain::form::FormState;
    use crate::domain::validation::types::FieldRef;
    use crate::infrastructure::adapters::memory_form::MemoryForm;

    /// Assert that exactly `expected` failed, in this order
    pub fn assert_invalid_fields(state: &FormState, expected: &[&str]) {
        assert_eq!(state.invalid_field_ids(), expected, "unexpected invalid fields");
    }

    /// Assert the field is marked and shows `message`
    pub fn assert_field_error(form: &MemoryForm, field: &FieldRef, message: &str) {
        assert!(form.is_marked_invalid(field), "{} is not marked invalid", field);
        assert_eq!(form.feedback(field).as_deref(), Some(message));
    }

    /// Assert the field carries no error marker or message
    pub fn assert_field_clean(form: &MemoryForm, field: &FieldRef) {
        assert!(!form.is_marked_invalid(field), "{} is marked invalid", field);
        assert!(form.feedback(field).is_none(), "{} still shows a message", field);
    }
}
