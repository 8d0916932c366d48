//! The query controller: active scope, filter, and fetch state.
//!
//! Owns the (scope, filter, fetch-state) triple and the request generation
//! counter that gives last-request-wins ordering. The controller itself
//! performs no I/O: every mutation that requires fresh data returns a
//! [`FetchTicket`] snapshot, the driver performs the asynchronous call,
//! and the finished result comes back through [`QueryController::complete`]
//! where stale generations are silently discarded.

use locnav_core::{FetchError, FilterCriteria, ListingScope, LocationRecord};
use tracing::{debug, warn};

/// Monotonically increasing fetch request generation.
///
/// Each issued fetch captures the generation current at issue time; a
/// result is applied only if no newer fetch has been issued since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    /// Returns the next generation.
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// A snapshot of one fetch request: what to fetch and which generation it
/// belongs to.
///
/// The driver resolves the ticket into a service call and reports the
/// result back tagged with the ticket's generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation captured when the fetch was issued.
    pub generation: Generation,

    /// Listing scope active at issue time.
    pub scope: ListingScope,

    /// Filter criteria active at issue time.
    pub filter: FilterCriteria,
}

/// What [`QueryController::complete`] did with a finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result belonged to the current generation and was applied.
    Applied,

    /// A newer fetch had been issued; the result was discarded.
    Stale,
}

/// Owns the active listing query and its fetch state.
#[derive(Debug, Clone, Default)]
pub struct QueryController {
    scope: ListingScope,
    filter: FilterCriteria,
    rows: Vec<LocationRecord>,
    error: Option<String>,
    loading: bool,
    generation: Generation,
}

impl QueryController {
    /// Creates a controller at the root listing with no filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing scope and schedules a refetch.
    ///
    /// Clears any previous error state synchronously, before the fetch
    /// resolves, so a stale banner never survives a scope change.
    pub fn set_scope(&mut self, scope: ListingScope) -> FetchTicket {
        debug!(?scope, "Switching listing scope");
        self.scope = scope;
        self.error = None;
        self.issue()
    }

    /// Replaces the filter criteria and schedules a refetch.
    pub fn set_filter(&mut self, filter: FilterCriteria) -> FetchTicket {
        debug!(fields = filter.len(), "Replacing filter criteria");
        self.filter = filter;
        self.issue()
    }

    /// Schedules a refetch of the current (scope, filter).
    pub fn refetch(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Restores the root listing scope, leaving the filter untouched.
    pub fn reset(&mut self) -> FetchTicket {
        self.set_scope(ListingScope::Root)
    }

    /// Applies a finished fetch if it still belongs to the current
    /// generation; otherwise discards it.
    ///
    /// On success the rows are replaced and the error cleared. On failure
    /// the previous rows are preserved and the failure reason is captured
    /// into the error state; nothing propagates past this boundary.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<Vec<LocationRecord>, FetchError>,
    ) -> Completion {
        if generation != self.generation {
            debug!(
                stale = generation.as_u64(),
                current = self.generation.as_u64(),
                "Discarding superseded fetch result"
            );
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(rows) => {
                debug!(count = rows.len(), "Fetch completed");
                self.rows = rows;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "List fetch failed; keeping last-good rows");
                self.error = Some(e.to_string());
            }
        }
        Completion::Applied
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation = self.generation.next();
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            scope: self.scope.clone(),
            filter: self.filter.clone(),
        }
    }

    /// Returns the active listing scope.
    #[must_use]
    pub const fn scope(&self) -> &ListingScope {
        &self.scope
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    /// Returns the latest successfully fetched rows.
    #[must_use]
    pub fn rows(&self) -> &[LocationRecord] {
        &self.rows
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the captured failure reason, if the last applied fetch
    /// failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current request generation.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locnav_core::LocationId;

    fn rows(names: &[&str]) -> Vec<LocationRecord> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| LocationRecord::new(LocationId::new(i.to_string()), *name))
            .collect()
    }

    #[test]
    fn test_last_request_wins_out_of_order() {
        let mut query = QueryController::new();

        let first = query.refetch();
        let second = query.refetch();

        // Second fetch resolves first and is applied.
        assert_eq!(
            query.complete(second.generation, Ok(rows(&["new"]))),
            Completion::Applied
        );
        // First fetch resolves late and is dropped.
        assert_eq!(
            query.complete(first.generation, Ok(rows(&["old"]))),
            Completion::Stale
        );

        assert_eq!(query.rows()[0].name, "new");
        assert!(!query.is_loading());
    }

    #[test]
    fn test_failure_preserves_last_good_rows() {
        let mut query = QueryController::new();

        let ticket = query.refetch();
        query.complete(ticket.generation, Ok(rows(&["Tehran"])));

        let ticket = query.refetch();
        query.complete(
            ticket.generation,
            Err(FetchError::backend(502, "bad gateway")),
        );

        assert_eq!(query.rows().len(), 1);
        assert_eq!(query.rows()[0].name, "Tehran");
        assert!(query.error().is_some_and(|e| e.contains("502")));
    }

    #[test]
    fn test_set_scope_clears_error_synchronously() {
        let mut query = QueryController::new();
        let ticket = query.refetch();
        query.complete(ticket.generation, Err(FetchError::not_found("nothing")));
        assert!(query.error().is_some());

        let ticket = query.set_scope(ListingScope::children(LocationId::new("42")));
        // Error cleared before the new fetch resolves.
        assert!(query.error().is_none());
        assert!(query.is_loading());
        assert_eq!(ticket.scope, ListingScope::children(LocationId::new("42")));
    }

    #[test]
    fn test_reset_keeps_filter() {
        let mut query = QueryController::new();
        let mut criteria = FilterCriteria::default();
        criteria.insert("name".to_owned(), "Teh".to_owned());
        query.set_filter(criteria);

        query.set_scope(ListingScope::children(LocationId::new("1")));
        let ticket = query.reset();

        assert!(ticket.scope.is_root());
        assert_eq!(ticket.filter.get("name").map(String::as_str), Some("Teh"));
        assert_eq!(query.filter().len(), 1);
    }

    #[test]
    fn test_ticket_snapshots_filter_at_issue_time() {
        let mut query = QueryController::new();
        let mut criteria = FilterCriteria::default();
        criteria.insert("name".to_owned(), "x".to_owned());
        let ticket = query.set_filter(criteria);

        // Mutating the filter afterwards must not affect the issued ticket.
        query.set_filter(FilterCriteria::default());
        assert_eq!(ticket.filter.get("name").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_generations_strictly_increase() {
        let mut query = QueryController::new();
        let a = query.refetch().generation;
        let b = query.refetch().generation;
        let c = query.set_filter(FilterCriteria::default()).generation;
        assert!(a < b && b < c);
    }
}
