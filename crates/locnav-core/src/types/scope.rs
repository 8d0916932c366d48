//! Listing scope and breadcrumb types for drill-down navigation.

use serde::{Deserialize, Serialize};

use super::ids::LocationId;

/// Identifies which listing query is active.
///
/// `Root` selects the top-level listing; `Children` selects the children of
/// a specific location and carries the fixed (non-filter) parameter. The
/// navigation stack and the active scope move together: an empty breadcrumb
/// trail always means `Root`, and the top frame's id always equals the
/// `Children` location id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingScope {
    /// The root listing of all top-level locations.
    #[default]
    Root,

    /// The children of a specific location.
    Children {
        /// The location whose children are listed.
        location_id: LocationId,
    },
}

impl ListingScope {
    /// Creates a children scope for the given location.
    #[must_use]
    pub const fn children(location_id: LocationId) -> Self {
        Self::Children { location_id }
    }

    /// Returns `true` if this is the root listing.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Returns the fixed location id parameter, if any.
    #[must_use]
    pub const fn location_id(&self) -> Option<&LocationId> {
        match self {
            Self::Root => None,
            Self::Children { location_id } => Some(location_id),
        }
    }
}

/// A snapshot of a location at the moment the user drilled into it.
///
/// The breadcrumb trail is an ordered record of the path taken, not of the
/// hierarchy shape; it only ever grows by one on drill-in and shrinks on
/// back navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Identifier of the visited location.
    pub id: LocationId,

    /// Display name captured at drill-in time.
    pub display_name: String,
}

impl Breadcrumb {
    /// Creates a new breadcrumb.
    #[must_use]
    pub fn new(id: LocationId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_default_is_root() {
        assert!(ListingScope::default().is_root());
        assert!(ListingScope::default().location_id().is_none());
    }

    #[test]
    fn test_children_scope_carries_id() {
        let scope = ListingScope::children(LocationId::new("42"));
        assert!(!scope.is_root());
        assert_eq!(scope.location_id(), Some(&LocationId::new("42")));
    }

    #[test]
    fn test_scope_serde_tagged() {
        let scope = ListingScope::children(LocationId::new("7"));
        let json = serde_json::to_string(&scope).unwrap();
        assert!(json.contains("\"kind\":\"children\""));
        let parsed: ListingScope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scope);
    }
}
