//! Domain types for the locnav workspace.
//!
//! This module contains the core domain types used throughout the
//! controller and CLI for representing locations, reference tables,
//! derived view rows, and query state.
//!
//! # Module Organization
//!
//! - [`ids`] - Newtype identifiers for locations, levels, and users
//! - [`location`] - The raw location record as fetched from the backend
//! - [`lookup`] - Reference tables (levels, users) loaded once per session
//! - [`row`] - The denormalized view row derived by the joiner
//! - [`scope`] - Listing scope (root vs. children) and breadcrumbs
//! - [`filter`] - Filter criteria and the declarative field schema
//!
//! All public types are re-exported at this module level and at the
//! crate root:
//!
//! ```
//! use locnav_core::{LocationId, LocationRecord, ListingScope};
//! ```

mod filter;
mod ids;
mod location;
mod lookup;
mod row;
mod scope;

pub use filter::{FieldSpec, FilterCriteria};
pub use ids::{LevelId, LocationId, UserId};
pub use location::LocationRecord;
pub use lookup::{Level, User};
pub use row::{LocationRow, NO_LEVEL_PLACEHOLDER, NO_MANAGER_PLACEHOLDER};
pub use scope::{Breadcrumb, ListingScope};
