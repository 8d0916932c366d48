//! Newtype identifiers for domain entities.
//!
//! Identifiers are opaque strings assigned by the backend. Newtypes keep a
//! location id from being used where a user or level id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a new identifier from any string-like value.
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Unique, stable identifier of a location.
    ///
    /// # Examples
    ///
    /// ```
    /// use locnav_core::LocationId;
    ///
    /// let id = LocationId::new("42");
    /// assert_eq!(id.as_str(), "42");
    /// assert_eq!(id, LocationId::from("42"));
    /// ```
    LocationId
}

string_id! {
    /// Identifier of a level in the reference table.
    LevelId
}

string_id! {
    /// Identifier of a user (location manager).
    UserId
}
