//! User intents and outward-facing effects.
//!
//! Intents are the commands the rendering layer emits in response to user
//! interaction; effects are what the screen controller hands back for the
//! collaborators it does not own (routing, modal dialogs).
//!
//! # Intent Flow
//!
//! ```text
//! UI Interaction → Intent → LocationScreen::handle → Effect (+ fetches)
//! ```

use locnav_core::{LocationId, LocationRow};

/// User-initiated intents on the location listing screen.
#[derive(Debug, Clone, PartialEq, Default)]
#[non_exhaustive]
pub enum Intent {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Drill into the children of the given location.
    SelectRow(LocationId),

    /// Navigate back along the breadcrumb trail.
    GoBack,

    /// Return to the root listing, discarding the trail.
    Reset,

    // =========================================================================
    // Filtering
    // =========================================================================
    /// Update one filter form field.
    SetFilterField {
        /// Schema key of the field.
        key: String,
        /// New value; empty clears the field.
        value: String,
    },

    /// Submit the filter form, replacing the active criteria.
    SubmitFilter,

    /// Clear the filter form and re-list unfiltered.
    ClearFilter,

    // =========================================================================
    // Row Operations
    // =========================================================================
    /// Request the add-location flow for the current trail position.
    AddNew,

    /// Request the detail view of a row.
    RequestDetail(LocationId),

    /// Request deletion of a row (opens the external confirmation).
    RequestDelete(LocationId),

    /// A deletion was confirmed externally; the listing refreshes.
    ConfirmDelete(LocationId),

    /// Refresh the current listing.
    Refresh,

    /// No operation.
    #[default]
    None,
}

impl Intent {
    /// Returns `true` if this is a navigation intent.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self, Self::SelectRow(_) | Self::GoBack | Self::Reset)
    }

    /// Returns `true` if this is a filter-related intent.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::SetFilterField { .. } | Self::SubmitFilter | Self::ClearFilter
        )
    }
}

/// Outward-facing results of handling an intent.
///
/// The screen controller never routes or opens dialogs itself; it hands
/// these to the rendering/routing collaborators.
#[derive(Debug, Clone, PartialEq, Default)]
#[non_exhaustive]
pub enum Effect {
    /// Navigate to an external screen (e.g. the add-location form).
    RouteTo(String),

    /// Show the detail dialog for the given row snapshot.
    ShowDetail(LocationRow),

    /// Ask the user to confirm deletion of the given row snapshot.
    ConfirmDelete(LocationRow),

    /// Nothing to do outside the screen.
    #[default]
    None,
}

impl Effect {
    /// Returns `true` if the effect requires external handling.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_is_navigation() {
        assert!(Intent::SelectRow(LocationId::new("1")).is_navigation());
        assert!(Intent::GoBack.is_navigation());
        assert!(Intent::Reset.is_navigation());

        assert!(!Intent::SubmitFilter.is_navigation());
        assert!(!Intent::Refresh.is_navigation());
    }

    #[test]
    fn test_intent_is_filter() {
        assert!(Intent::SubmitFilter.is_filter());
        assert!(Intent::ClearFilter.is_filter());
        assert!(Intent::SetFilterField {
            key: "name".to_owned(),
            value: "x".to_owned()
        }
        .is_filter());

        assert!(!Intent::GoBack.is_filter());
    }

    #[test]
    fn test_intent_default() {
        assert_eq!(Intent::default(), Intent::None);
    }

    #[test]
    fn test_effect_is_external() {
        assert!(Effect::RouteTo("/location/add/null".to_owned()).is_external());
        assert!(!Effect::None.is_external());
    }
}
