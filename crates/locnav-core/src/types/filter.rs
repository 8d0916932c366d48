//! Filter criteria and the declarative field schema.

use serde::{Deserialize, Serialize};

use crate::hash::FxHashMap;

/// An open mapping from filter field key to entered value.
///
/// Keys are defined by the per-screen [`FieldSpec`] schema; values are
/// free-form strings. An empty map means the listing is unfiltered. The
/// criteria map travels to the backend alongside the fixed scope
/// parameters; the controller itself never interprets the values.
pub type FilterCriteria = FxHashMap<String, String>;

/// One declarative filter form field.
///
/// A screen supplies its schema as a `Vec<FieldSpec>`; the filter form
/// itself hardcodes no field identities, so different screens reuse the
/// same form logic over different schemas.
///
/// # Examples
///
/// ```
/// use locnav_core::FieldSpec;
///
/// let field = FieldSpec::new("name", "Name", "Enter a name");
/// assert_eq!(field.key, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Stable key used in the criteria map.
    pub key: String,

    /// Label shown next to the input.
    pub label: String,

    /// Hint text shown inside an empty input.
    pub placeholder: String,
}

impl FieldSpec {
    /// Creates a new field spec.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_roundtrip() {
        let field = FieldSpec::new("parent_location", "Parent location", "Enter the parent");
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, field);
    }

    #[test]
    fn test_criteria_is_plain_map() {
        let mut criteria = FilterCriteria::default();
        criteria.insert("name".to_owned(), "Tehran".to_owned());
        assert_eq!(criteria.get("name").map(String::as_str), Some("Tehran"));
    }
}
