//! The fetch collaborator contract.
//!
//! The controller never talks to a backend directly; it consumes an
//! implementation of [`LocationService`]. The CLI supplies a JSON-backed
//! implementation, tests supply scripted doubles, and an HTTP client
//! would slot in the same way.

use std::future::Future;

use locnav_core::{FetchError, FilterCriteria, Level, LocationId, LocationRecord, User};

/// Asynchronous listing and reference-table operations.
///
/// Methods take owned parameters so implementations can move them into
/// spawned work, and the returned futures are `Send` so the driver can
/// run fetches as tokio tasks. All persistence and authorization live
/// behind this trait.
pub trait LocationService: Send + Sync + 'static {
    /// Fetches the root listing, filtered by the given criteria.
    fn fetch_root(
        &self,
        filter: FilterCriteria,
    ) -> impl Future<Output = Result<Vec<LocationRecord>, FetchError>> + Send;

    /// Fetches the children of a location, filtered by the given criteria.
    fn fetch_children(
        &self,
        location_id: LocationId,
        filter: FilterCriteria,
    ) -> impl Future<Output = Result<Vec<LocationRecord>, FetchError>> + Send;

    /// Fetches the levels reference table.
    fn fetch_levels(&self) -> impl Future<Output = Result<Vec<Level>, FetchError>> + Send;

    /// Fetches the users reference table.
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}
