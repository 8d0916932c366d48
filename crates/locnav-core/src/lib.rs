//! Core types, errors, and configuration for the locnav workspace.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types (`LocationRecord`, `Level`, `User`, `LocationRow`)
//! - Listing scope and breadcrumb types for drill-down navigation
//! - Filter criteria and field schema types
//! - Error types for consistent error handling
//! - Configuration structures
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, ScreenConfig, ServiceConfig};
pub use error::{ConfigError, FetchError};
pub use hash::{fx_hash_map, fx_hash_set, FxBuildHasher, FxHashMap, FxHashSet};
pub use types::{
    Breadcrumb, FieldSpec, FilterCriteria, Level, LevelId, ListingScope, LocationId,
    LocationRecord, LocationRow, User, UserId, NO_LEVEL_PLACEHOLDER, NO_MANAGER_PLACEHOLDER,
};
