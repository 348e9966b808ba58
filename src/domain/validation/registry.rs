use std::collections::HashMap;

use super::types::RuleDescriptor;

/// Ordered rules bound to one field. Evaluation stops at the first failure.
#[derive(Debug, Clone, Default)]
pub struct FieldRuleSet {
    rules: Vec<RuleDescriptor>,
}

impl FieldRuleSet {
    pub fn new(rules: Vec<RuleDescriptor>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<RuleDescriptor>> for FieldRuleSet {
    fn from(rules: Vec<RuleDescriptor>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<RuleDescriptor> for FieldRuleSet {
    fn from_iter<I: IntoIterator<Item = RuleDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Rule sets keyed by field identifier
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    fields: HashMap<String, FieldRuleSet>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule set for a field, replacing any previous one
    pub fn register(&mut self, field_id: impl Into<String>, rules: impl Into<FieldRuleSet>) {
        self.fields.insert(field_id.into(), rules.into());
    }

    /// Get the rule set of a field
    pub fn get(&self, field_id: &str) -> Option<&FieldRuleSet> {
        self.fields.get(field_id)
    }

    /// Check if a field has rules registered
    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.contains_key(field_id)
    }

    /// Remove the rule set of a field
    pub fn remove(&mut self, field_id: &str) -> Option<FieldRuleSet> {
        self.fields.remove(field_id)
    }

    /// Identifiers of every field with rules, sorted
    pub fn field_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
