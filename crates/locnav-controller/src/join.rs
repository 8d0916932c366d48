//! Lookup cache and the denormalizing record joiner.
//!
//! Levels and users are loaded once at screen startup. The joiner is a
//! pure recomputation over the full row set; it stays in the
//! "not yet computed" state until both lookup tables finished loading so
//! the screen never shows false placeholders during startup.

use locnav_core::{
    FetchError, FxHashMap, Level, LevelId, LocationRecord, LocationRow, User, UserId,
    NO_LEVEL_PLACEHOLDER, NO_MANAGER_PLACEHOLDER,
};
use tracing::warn;

/// Id-keyed reference tables for join resolution.
///
/// Each table loads exactly once per session. A failed lookup fetch marks
/// the table as loaded-empty, so joins degrade to placeholder names
/// instead of blocking the whole screen.
#[derive(Debug, Clone, Default)]
pub struct LookupCache {
    levels: FxHashMap<LevelId, Level>,
    users: FxHashMap<UserId, User>,
    levels_loaded: bool,
    users_loaded: bool,
}

impl LookupCache {
    /// Creates an empty cache with neither table loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the result of the one-shot levels fetch.
    pub fn load_levels(&mut self, result: Result<Vec<Level>, FetchError>) {
        match result {
            Ok(levels) => {
                self.levels = levels.into_iter().map(|l| (l.id.clone(), l)).collect();
            }
            Err(e) => {
                warn!(error = %e, "Levels fetch failed; joins will use placeholders");
            }
        }
        self.levels_loaded = true;
    }

    /// Stores the result of the one-shot users fetch.
    pub fn load_users(&mut self, result: Result<Vec<User>, FetchError>) {
        match result {
            Ok(users) => {
                self.users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
            }
            Err(e) => {
                warn!(error = %e, "Users fetch failed; joins will use placeholders");
            }
        }
        self.users_loaded = true;
    }

    /// Returns `true` once both reference tables finished their initial
    /// load (successfully or not).
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.levels_loaded && self.users_loaded
    }

    /// Looks up a level by id.
    #[must_use]
    pub fn level(&self, id: &LevelId) -> Option<&Level> {
        self.levels.get(id)
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Returns all loaded levels (unordered).
    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.values()
    }

    /// Returns all loaded users (unordered).
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

/// Joins raw rows with the lookup cache into display-ready rows.
///
/// Returns `None` until both lookup tables have completed their initial
/// load ("not yet computed"); the rendering layer shows a loading state
/// instead. Missing or unresolved references become
/// [`NO_MANAGER_PLACEHOLDER`] / [`NO_LEVEL_PLACEHOLDER`]. Inputs are not
/// mutated and unchanged inputs always derive identical output.
#[must_use]
pub fn join(rows: &[LocationRecord], cache: &LookupCache) -> Option<Vec<LocationRow>> {
    if !cache.is_ready() {
        return None;
    }

    let joined = rows
        .iter()
        .map(|record| {
            let manager_name = record
                .manager
                .as_ref()
                .and_then(|id| cache.user(id))
                .map_or_else(|| NO_MANAGER_PLACEHOLDER.to_owned(), |u| u.full_name.clone());

            let level_name = record
                .level_id
                .as_ref()
                .and_then(|id| cache.level(id))
                .map_or_else(|| NO_LEVEL_PLACEHOLDER.to_owned(), |l| l.name.clone());

            LocationRow {
                record: record.clone(),
                manager_name,
                level_name,
            }
        })
        .collect();

    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locnav_core::LocationId;

    fn ready_cache(levels: Vec<Level>, users: Vec<User>) -> LookupCache {
        let mut cache = LookupCache::new();
        cache.load_levels(Ok(levels));
        cache.load_users(Ok(users));
        cache
    }

    #[test]
    fn test_join_waits_for_both_tables() {
        let rows = vec![LocationRecord::new(LocationId::new("1"), "Tehran")];

        let mut cache = LookupCache::new();
        assert!(join(&rows, &cache).is_none());

        cache.load_levels(Ok(vec![]));
        assert!(join(&rows, &cache).is_none());

        cache.load_users(Ok(vec![]));
        assert!(join(&rows, &cache).is_some());
    }

    #[test]
    fn test_join_empty_lookups_yields_all_placeholders() {
        let rows = vec![
            LocationRecord::new(LocationId::new("1"), "Tehran")
                .with_manager(UserId::new("u-1"))
                .with_level(LevelId::new("lvl-1")),
            LocationRecord::new(LocationId::new("2"), "Qom"),
        ];
        let cache = ready_cache(vec![], vec![]);

        let joined = join(&rows, &cache).unwrap();
        assert_eq!(joined.len(), 2);
        for row in &joined {
            assert_eq!(row.manager_name, NO_MANAGER_PLACEHOLDER);
            assert_eq!(row.level_name, NO_LEVEL_PLACEHOLDER);
        }
    }

    #[test]
    fn test_join_mixed_resolution() {
        let rows = vec![
            LocationRecord::new(LocationId::new("1"), "Tehran").with_manager(UserId::new("u-1")),
            LocationRecord::new(LocationId::new("2"), "Qom").with_manager(UserId::new("u-404")),
        ];
        let cache = ready_cache(
            vec![],
            vec![User::new(UserId::new("u-1"), "Sara Ahmadi")],
        );

        let joined = join(&rows, &cache).unwrap();
        assert_eq!(joined[0].manager_name, "Sara Ahmadi");
        assert_eq!(joined[1].manager_name, NO_MANAGER_PLACEHOLDER);
    }

    #[test]
    fn test_join_is_deterministic() {
        let rows = vec![
            LocationRecord::new(LocationId::new("1"), "Tehran").with_level(LevelId::new("lvl-1")),
        ];
        let cache = ready_cache(vec![Level::new(LevelId::new("lvl-1"), "Province")], vec![]);

        let first = join(&rows, &cache).unwrap();
        let second = join(&rows, &cache).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_lookup_fetch_degrades_to_placeholders() {
        let rows =
            vec![LocationRecord::new(LocationId::new("1"), "Tehran").with_manager(UserId::new("u-1"))];

        let mut cache = LookupCache::new();
        cache.load_levels(Err(FetchError::backend(500, "levels down")));
        cache.load_users(Err(FetchError::backend(500, "users down")));

        // Both tables count as loaded; the screen is not blocked.
        let joined = join(&rows, &cache).unwrap();
        assert_eq!(joined[0].manager_name, NO_MANAGER_PLACEHOLDER);
        assert_eq!(joined[0].level_name, NO_LEVEL_PLACEHOLDER);
    }

    #[test]
    fn test_join_does_not_mutate_inputs() {
        let rows = vec![LocationRecord::new(LocationId::new("1"), "Tehran")];
        let before = rows.clone();
        let cache = ready_cache(vec![], vec![]);
        let _ = join(&rows, &cache);
        assert_eq!(rows, before);
    }
}
