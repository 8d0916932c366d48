//! The denormalized view row produced by the record joiner.

use serde::{Deserialize, Serialize};

use super::location::LocationRecord;

/// Display value substituted when a manager reference cannot be resolved.
pub const NO_MANAGER_PLACEHOLDER: &str = "unspecified manager";

/// Display value substituted when a level reference cannot be resolved.
pub const NO_LEVEL_PLACEHOLDER: &str = "no level assigned";

/// A location record joined with its reference lookups, ready for display.
///
/// Derived fresh every time the raw rows or the lookup tables change and
/// never persisted. Missing references are substituted with
/// [`NO_MANAGER_PLACEHOLDER`] and [`NO_LEVEL_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    /// The raw record, unchanged.
    #[serde(flatten)]
    pub record: LocationRecord,

    /// Resolved manager full name, or the placeholder.
    pub manager_name: String,

    /// Resolved level name, or the placeholder.
    pub level_name: String,
}

impl LocationRow {
    /// Returns `true` if the manager reference resolved to a real user.
    #[must_use]
    pub fn has_manager(&self) -> bool {
        self.manager_name != NO_MANAGER_PLACEHOLDER
    }

    /// Returns `true` if the level reference resolved to a real level.
    #[must_use]
    pub fn has_level(&self) -> bool {
        self.level_name != NO_LEVEL_PLACEHOLDER
    }
}
