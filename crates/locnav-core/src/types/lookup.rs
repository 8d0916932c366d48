//! Reference tables joined against location records.
//!
//! Levels and users are loaded once at screen startup and are immutable
//! for the rest of the session. The joiner resolves `level_id` and
//! `manager` references against these tables.

use serde::{Deserialize, Serialize};

use super::ids::{LevelId, UserId};

/// A hierarchy level (e.g. province, district).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Identifier referenced by [`LocationRecord::level_id`](super::LocationRecord).
    pub id: LevelId,

    /// Display name.
    pub name: String,
}

impl Level {
    /// Creates a new level.
    #[must_use]
    pub fn new(id: LevelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A user who can manage locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier referenced by [`LocationRecord::manager`](super::LocationRecord).
    pub id: UserId,

    /// Full display name.
    pub full_name: String,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(id: UserId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_roundtrip() {
        let level = Level::new(LevelId::new("2"), "District");
        let json = serde_json::to_string(&level).unwrap();
        let parsed: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, level);
    }

    #[test]
    fn test_user_new() {
        let user = User::new(UserId::new("u-1"), "Sara Ahmadi");
        assert_eq!(user.full_name, "Sara Ahmadi");
    }
}
