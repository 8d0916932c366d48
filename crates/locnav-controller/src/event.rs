//! Completion events delivered back to the screen controller.
//!
//! Fetches are the only operations that suspend. The driver spawns them
//! and funnels their results through a single channel of [`Event`]s, so
//! all state mutation stays on one logical owner.
//!
//! # Event Sources
//!
//! - **List fetches**: tagged with the request generation they belong to
//! - **Lookup loads**: the fire-once levels and users fetches

use locnav_core::{FetchError, Level, LocationRecord, User};

use crate::query::Generation;

/// A finished asynchronous operation.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A listing fetch resolved.
    ListFetched {
        /// Generation captured when the fetch was issued.
        generation: Generation,
        /// Rows on success, failure reason otherwise.
        result: Result<Vec<LocationRecord>, FetchError>,
    },

    /// The one-shot levels reference fetch resolved.
    LevelsFetched(Result<Vec<Level>, FetchError>),

    /// The one-shot users reference fetch resolved.
    UsersFetched(Result<Vec<User>, FetchError>),
}

impl Event {
    /// Returns `true` if this is a listing fetch completion.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::ListFetched { .. })
    }

    /// Returns `true` if this is a lookup-table load completion.
    #[inline]
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::LevelsFetched(_) | Self::UsersFetched(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kinds() {
        let list = Event::ListFetched {
            generation: Generation::default(),
            result: Ok(vec![]),
        };
        assert!(list.is_list());
        assert!(!list.is_lookup());

        let levels = Event::LevelsFetched(Ok(vec![]));
        assert!(levels.is_lookup());
        assert!(!levels.is_list());
    }
}
