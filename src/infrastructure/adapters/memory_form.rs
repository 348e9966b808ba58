//! In-memory form adapter
//!
//! A headless [`FormView`] used by tests and by hosts that render elsewhere.
//! Clones share the same underlying form, like handles to one DOM subtree.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::validation::types::FieldRef;
use crate::infrastructure::view::{Document, FormView};

#[derive(Debug, Clone)]
struct FieldNode {
    field: FieldRef,
    value: String,
    invalid: bool,
    feedback: Option<Feedback>,
}

#[derive(Debug, Clone)]
struct Feedback {
    message: String,
    visible: bool,
}

#[derive(Debug, Default)]
struct FormNode {
    fields: Vec<FieldNode>,
    banner: Option<String>,
    focused: Option<FieldRef>,
}

impl FormNode {
    fn field_mut(&mut self, field: &FieldRef) -> Option<&mut FieldNode> {
        self.fields.iter_mut().find(|node| &node.field == field)
    }

    fn field(&self, field: &FieldRef) -> Option<&FieldNode> {
        self.fields.iter().find(|node| &node.field == field)
    }
}

/// Shared handle to an in-memory form
#[derive(Debug, Clone)]
pub struct MemoryForm {
    id: String,
    inner: Arc<Mutex<FormNode>>,
}

impl MemoryForm {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: Arc::new(Mutex::new(FormNode::default())),
        }
    }

    /// Append a field at the end of the form
    pub fn with_field(self, field: FieldRef, value: impl Into<String>) -> Self {
        self.node().fields.push(FieldNode {
            field,
            value: value.into(),
            invalid: false,
            feedback: None,
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Change a field's value, as typing would
    pub fn set_value(&self, field: &FieldRef, value: impl Into<String>) {
        if let Some(node) = self.node().field_mut(field) {
            node.value = value.into();
        }
    }

    pub fn is_marked_invalid(&self, field: &FieldRef) -> bool {
        self.node().field(field).map(|node| node.invalid).unwrap_or(false)
    }

    /// Message currently displayed next to the field
    pub fn feedback(&self, field: &FieldRef) -> Option<String> {
        self.node()
            .field(field)
            .and_then(|node| node.feedback.as_ref())
            .filter(|feedback| feedback.visible)
            .map(|feedback| feedback.message.clone())
    }

    pub fn banner(&self) -> Option<String> {
        self.node().banner.clone()
    }

    pub fn focused(&self) -> Option<FieldRef> {
        self.node().focused.clone()
    }

    fn node(&self) -> MutexGuard<'_, FormNode> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormView for MemoryForm {
    fn fields(&self) -> Vec<FieldRef> {
        self.node().fields.iter().map(|node| node.field.clone()).collect()
    }

    fn value(&self, field: &FieldRef) -> String {
        self.node()
            .field(field)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn show_field_error(&self, field: &FieldRef, message: &str) {
        if let Some(node) = self.node().field_mut(field) {
            node.invalid = true;
            node.feedback = Some(Feedback {
                message: message.to_string(),
                visible: true,
            });
        }
    }

    fn clear_field_error(&self, field: &FieldRef) {
        if let Some(node) = self.node().field_mut(field) {
            node.invalid = false;
            if let Some(feedback) = node.feedback.as_mut() {
                feedback.visible = false;
            }
        }
    }

    fn show_general_error(&self, message: &str) {
        self.node().banner = Some(message.to_string());
    }

    fn remove_general_error(&self) {
        self.node().banner = None;
    }

    fn focus_field(&self, field: &FieldRef) {
        let mut node = self.node();
        if node.field(field).is_some() {
            node.focused = Some(field.clone());
        }
    }
}

/// Set of in-memory forms addressable by container id
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    forms: HashMap<String, MemoryForm>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(mut self, form: MemoryForm) -> Self {
        self.forms.insert(form.id().to_string(), form);
        self
    }
}

impl Document for MemoryDocument {
    type Form = MemoryForm;

    fn find_form(&self, container_id: &str) -> Option<MemoryForm> {
        self.forms.get(container_id).cloned()
    }
}
