//! Schema-driven filter form.
//!
//! A generic key/value filter store driven by a declarative field schema.
//! The form itself hardcodes no field identities: the location listing
//! supplies `name` / `CIAM` / `parent_location`, other screens supply a
//! different schema over the same logic.

use locnav_core::{FieldSpec, FilterCriteria};
use tracing::warn;

/// State of the composable filter form.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    schema: Vec<FieldSpec>,
    values: FilterCriteria,
}

impl FilterForm {
    /// Creates a form over the given field schema with all fields empty.
    #[must_use]
    pub fn new(schema: Vec<FieldSpec>) -> Self {
        Self {
            schema,
            values: FilterCriteria::default(),
        }
    }

    /// Returns the field schema.
    #[must_use]
    pub fn schema(&self) -> &[FieldSpec] {
        &self.schema
    }

    /// Updates a single field without affecting the others.
    ///
    /// Keys not present in the schema are rejected and ignored. Setting a
    /// field to the empty string clears it from the criteria.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        if !self.schema.iter().any(|f| f.key == key) {
            warn!(key, "Ignoring filter value for unknown field");
            return;
        }

        let value = value.into();
        if value.is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_owned(), value);
        }
    }

    /// Returns the current value of a field, if set.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Clears all entered values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns `true` if any field has a value.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }

    /// Hands the full values map over for submission to the query
    /// controller.
    #[must_use]
    pub fn submit(&self) -> FilterCriteria {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Name", "Enter a name"),
            FieldSpec::new("CIAM", "CIAM", "Enter a CIAM code"),
            FieldSpec::new("parent_location", "Parent location", "Enter the parent"),
        ]
    }

    #[test]
    fn test_set_field_is_isolated() {
        let mut form = FilterForm::new(location_schema());
        form.set_field("name", "Tehran");
        form.set_field("CIAM", "X9");

        assert_eq!(form.field("name"), Some("Tehran"));
        assert_eq!(form.field("CIAM"), Some("X9"));
        assert_eq!(form.field("parent_location"), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut form = FilterForm::new(location_schema());
        form.set_field("status", "active");
        assert!(!form.is_active());
        assert!(form.submit().is_empty());
    }

    #[test]
    fn test_empty_value_clears_field() {
        let mut form = FilterForm::new(location_schema());
        form.set_field("name", "Tehran");
        form.set_field("name", "");
        assert_eq!(form.field("name"), None);
        assert!(!form.is_active());
    }

    #[test]
    fn test_submit_clones_full_values_map() {
        let mut form = FilterForm::new(location_schema());
        form.set_field("name", "Tehran");

        let submitted = form.submit();
        form.set_field("name", "Qom");

        // Submission is a snapshot, not a live view.
        assert_eq!(submitted.get("name").map(String::as_str), Some("Tehran"));
        assert_eq!(form.field("name"), Some("Qom"));
    }

    #[test]
    fn test_different_schema_same_logic() {
        let mut form = FilterForm::new(vec![FieldSpec::new("reporter", "Reporter", "")]);
        form.set_field("reporter", "u-1");
        form.set_field("name", "ignored");

        assert_eq!(form.field("reporter"), Some("u-1"));
        assert_eq!(form.submit().len(), 1);
    }
}
