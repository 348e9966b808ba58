//! Rendering contract between the validator and the UI layer
//!
//! The validator decides; implementations of these traits render. Methods take
//! `&self` because UI handles are shared and mutate through the host.

use crate::domain::validation::types::FieldRef;

/// A rendered form the validator can read values from and draw errors on
pub trait FormView {
    /// Every input, select and textarea of the form, in document order
    fn fields(&self) -> Vec<FieldRef>;

    /// Current raw value of a field; missing fields read as empty
    fn value(&self, field: &FieldRef) -> String;

    /// Mark the field invalid and show `message` next to it
    fn show_field_error(&self, field: &FieldRef, message: &str);

    /// Remove the invalid marker and hide the adjacent message
    fn clear_field_error(&self, field: &FieldRef);

    /// Show a dismissible banner at the top of the form
    fn show_general_error(&self, message: &str);

    /// Remove the banner; does nothing when it is already gone
    fn remove_general_error(&self);

    /// Scroll the field into view and give it focus
    fn focus_field(&self, field: &FieldRef);
}

/// Lookup of forms by container identifier
pub trait Document {
    type Form: FormView;

    fn find_form(&self, container_id: &str) -> Option<Self::Form>;
}
