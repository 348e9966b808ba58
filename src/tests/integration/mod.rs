//! Integration tests for the form lifecycle
//!
//! This module exercises configuration, schemas, the form validator and the
//! in-memory form together, as a host application would.

use crate::{
    application::form_validator::FormValidator,
    config::AppConfig,
    domain::{
        form::{FieldStatus, SubmitEvent, SubmitOutcome},
        validation::{
            catalog::RuleCatalog,
            schema::{FormSchema, PredicateRegistry},
            types::FieldRef,
        },
    },
    infrastructure::adapters::{
        memory_form::MemoryForm,
        timer::{ManualTimer, TokioTimer},
    },
    tests::{
        common::{assertions, fixtures},
        config,
        TestResult,
    },
};
use std::sync::Arc;
use std::time::Duration;

fn supplier_validator(form: &MemoryForm, timer: Arc<ManualTimer>) -> FormValidator<MemoryForm> {
    config::init();
    let catalog = RuleCatalog::default();
    let document = fixtures::document_with(form);
    let mut validator = FormValidator::new(&document, fixtures::SUPPLIER_FORM, &config::test_config(), timer);
    for (field, rules) in fixtures::supplier_rules(&catalog) {
        validator.add_rule(field, rules);
    }
    validator
}

#[test]
fn test_valid_form_submits() {
    let form = fixtures::valid_supplier_form();
    let mut validator = supplier_validator(&form, Arc::new(ManualTimer::new()));

    let mut event = SubmitEvent::new();
    assert_eq!(validator.handle_submit(&mut event), SubmitOutcome::Accepted);
    assert!(!event.default_prevented());
    for field in fixtures::supplier_fields() {
        assertions::assert_field_clean(&form, &field);
    }
}

#[test]
fn test_single_failing_field_is_identified() {
    let form = fixtures::valid_supplier_form();
    form.set_value(&FieldRef::named("ruc"), "179001234500");
    let mut validator = supplier_validator(&form, Arc::new(ManualTimer::new()));

    assert!(!validator.validate());

    let state = validator.validate_form();
    assertions::assert_invalid_fields(&state, &["ruc"]);
    assertions::assert_field_error(&form, &FieldRef::named("ruc"), "RUC debe tener 13 dígitos");
    assert_eq!(validator.field_status("ruc"), FieldStatus::Invalid);
    assert_eq!(validator.field_status("email"), FieldStatus::Valid);
    assert_eq!(validator.field_status("observaciones"), FieldStatus::Untouched);
}

#[test]
fn test_email_end_to_end() {
    let email = FieldRef::named("email");
    let form = MemoryForm::new("form-contacto").with_field(email.clone(), "not-an-email");
    let document = fixtures::document_with(&form);
    let catalog = RuleCatalog::default();
    let mut validator = FormValidator::new(
        &document,
        "form-contacto",
        &AppConfig::default(),
        Arc::new(ManualTimer::new()),
    );
    validator.add_rule("email", vec![catalog.required(None), catalog.email(None)]);

    let mut event = SubmitEvent::new();
    assert!(!validator.handle_submit(&mut event).is_accepted());
    assertions::assert_field_error(&form, &email, "Ingrese un email válido");

    form.set_value(&email, "");
    let mut event = SubmitEvent::new();
    assert!(!validator.handle_submit(&mut event).is_accepted());
    assertions::assert_field_error(&form, &email, "Este campo es obligatorio");
}

#[test]
fn test_focus_goes_to_first_invalid_in_document_order() {
    let form = fixtures::valid_supplier_form();
    form.set_value(&FieldRef::named("telefono"), "123");
    form.set_value(&FieldRef::named("ruc"), "");
    let mut validator = supplier_validator(&form, Arc::new(ManualTimer::new()));

    let mut event = SubmitEvent::new();
    match validator.handle_submit(&mut event) {
        SubmitOutcome::Blocked { state, first_invalid } => {
            assertions::assert_invalid_fields(&state, &["ruc", "telefono"]);
            assert_eq!(first_invalid, Some(FieldRef::named("ruc")));
        }
        SubmitOutcome::Accepted => panic!("submission should be blocked"),
    }
    assert_eq!(form.focused(), Some(FieldRef::named("ruc")));
}

#[test]
fn test_stale_banner_timer_removes_newer_banner() {
    let form = fixtures::valid_supplier_form();
    form.set_value(&FieldRef::named("email"), "ventas");
    let timer = Arc::new(ManualTimer::new());
    let mut validator = supplier_validator(&form, timer.clone());

    validator.handle_submit(&mut SubmitEvent::new());
    timer.advance(Duration::from_millis(600));
    validator.handle_submit(&mut SubmitEvent::new());
    assert_eq!(timer.pending(), 2);

    // The first removal fires 1000ms after the first submit, not the second
    timer.advance(Duration::from_millis(400));
    assert!(form.banner().is_none());

    timer.advance(Duration::from_millis(600));
    assert_eq!(timer.pending(), 0);
    assert!(form.banner().is_none());
}

#[test]
fn test_input_then_blur_cycle() {
    let form = fixtures::valid_supplier_form();
    let razon = FieldRef::named("razon_social");
    form.set_value(&razon, "AB");
    let mut validator = supplier_validator(&form, Arc::new(ManualTimer::new()));

    assert!(!validator.on_blur(&razon));
    assertions::assert_field_error(&form, &razon, "Mínimo 3 caracteres");

    form.set_value(&razon, "ABC");
    validator.on_input(&razon);
    assertions::assert_field_clean(&form, &razon);
    assert_eq!(validator.field_status("razon_social"), FieldStatus::Invalid);

    assert!(validator.on_blur(&razon));
    assert_eq!(validator.field_status("razon_social"), FieldStatus::Valid);
}

#[test]
fn test_schema_and_config_driven_form() -> TestResult<()> {
    config::init();
    let app_config = AppConfig::from_toml_str(
        r#"
        [form]
        general_error_message = "Revise el formulario"
        banner_dismiss_ms = 2000

        [messages]
        required = "Obligatorio"
        "#,
    )?;

    let schema = FormSchema::from_toml_str(
        r#"
        [[fields]]
        field = "codigo"
        rules = [{ kind = "required" }, { kind = "custom", predicate = "prefijo_articulo", message = "Use el prefijo ART-" }]

        [[fields]]
        field = "cantidad"
        rules = [{ kind = "numeric" }, { kind = "max", value = 500 }]
        "#,
    )?;

    let mut predicates = PredicateRegistry::new();
    predicates.register("prefijo_articulo", |value: &str, _: &FieldRef| value.starts_with("ART-"));
    let registry = schema.build(&RuleCatalog::from(&app_config), &predicates)?;

    let codigo = FieldRef::named("codigo");
    let cantidad = FieldRef::named("cantidad");
    let form = MemoryForm::new("form-movimiento")
        .with_field(codigo.clone(), "")
        .with_field(cantidad.clone(), "750");
    let timer = Arc::new(ManualTimer::new());
    let mut validator =
        FormValidator::new(&fixtures::document_with(&form), "form-movimiento", &app_config, timer.clone())
            .with_registry(registry);

    let mut event = SubmitEvent::new();
    assert!(!validator.handle_submit(&mut event).is_accepted());
    assertions::assert_field_error(&form, &codigo, "Obligatorio");
    assertions::assert_field_error(&form, &cantidad, "Valor máximo: 500");
    assert_eq!(form.banner().as_deref(), Some("Revise el formulario"));

    form.set_value(&codigo, "X-1");
    assert!(!validator.on_blur(&codigo));
    assertions::assert_field_error(&form, &codigo, "Use el prefijo ART-");

    timer.advance(Duration::from_millis(2000));
    assert!(form.banner().is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_banner_dismissed_on_tokio_runtime() -> TestResult<()> {
    let form = fixtures::valid_supplier_form();
    form.set_value(&FieldRef::named("email"), "");
    let document = fixtures::document_with(&form);
    let catalog = RuleCatalog::default();

    let mut validator = FormValidator::new(
        &document,
        fixtures::SUPPLIER_FORM,
        &AppConfig::default(),
        Arc::new(TokioTimer::current()?),
    );
    validator.add_rule("email", vec![catalog.required(None)]);

    assert!(!validator.handle_submit(&mut SubmitEvent::new()).is_accepted());
    assert!(form.banner().is_some());

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert!(form.banner().is_some());

    tokio::time::sleep(Duration::from_millis(200)).await;
    tokio::task::yield_now().await;
    assert!(form.banner().is_none());
    Ok(())
}
