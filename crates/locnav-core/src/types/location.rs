//! The raw location record as returned by the listing backend.

use serde::{Deserialize, Serialize};

use super::ids::{LevelId, LocationId, UserId};

/// A single location as fetched from the backend listing API.
///
/// The controller treats this record as read-only; creation and updates
/// happen externally through the fetch layer. `parent_location` is a
/// display reference to the parent (its name), not necessarily an id -
/// this mirrors the backend's denormalized payload.
///
/// # Examples
///
/// ```
/// use locnav_core::{LocationId, LocationRecord};
///
/// let record = LocationRecord::new(LocationId::new("42"), "Tehran");
/// assert_eq!(record.name, "Tehran");
/// assert!(record.manager.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique, stable identifier.
    pub id: LocationId,

    /// Display name.
    pub name: String,

    /// Display reference to the parent location (name, not id).
    #[serde(default)]
    pub parent_location: Option<String>,

    /// Reference into the levels table, if a level is assigned.
    #[serde(default)]
    pub level_id: Option<LevelId>,

    /// Reference into the users table, if a manager is assigned.
    #[serde(default)]
    pub manager: Option<UserId>,

    /// Geographic X coordinate (longitude).
    #[serde(default)]
    pub location_x: f64,

    /// Geographic Y coordinate (latitude).
    #[serde(default)]
    pub location_y: f64,
}

impl LocationRecord {
    /// Creates a record with the given id and name; all references absent.
    #[must_use]
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_location: None,
            level_id: None,
            manager: None,
            location_x: 0.0,
            location_y: 0.0,
        }
    }

    /// Sets the manager reference.
    #[must_use]
    pub fn with_manager(mut self, manager: UserId) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Sets the level reference.
    #[must_use]
    pub fn with_level(mut self, level: LevelId) -> Self {
        self.level_id = Some(level);
        self
    }

    /// Sets the parent display reference.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_location = Some(parent.into());
        self
    }

    /// Sets the geographic coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, x: f64, y: f64) -> Self {
        self.location_x = x;
        self.location_y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let record = LocationRecord::new(LocationId::new("1"), "District 5")
            .with_manager(UserId::new("u-9"))
            .with_level(LevelId::new("lvl-2"))
            .with_parent("Tehran")
            .with_coordinates(51.38, 35.69);

        assert_eq!(record.manager, Some(UserId::new("u-9")));
        assert_eq!(record.parent_location.as_deref(), Some("Tehran"));
        assert!((record.location_x - 51.38).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id": "3", "name": "Qom"}"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Qom");
        assert!(record.level_id.is_none());
        assert!(record.manager.is_none());
        assert!((record.location_x).abs() < f64::EPSILON);
    }
}
