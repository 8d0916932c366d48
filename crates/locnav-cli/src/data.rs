//! JSON-file-backed data service.
//!
//! Implements the [`LocationService`] contract over an in-memory dataset
//! deserialized from a single JSON file with `locations`, `levels`, and
//! `users` arrays. Filtering happens here, on the "backend" side, the way
//! the real listing API would apply it.
//!
//! Parent/child relationships follow the backend's denormalized payload:
//! a record's `parent_location` holds the parent's *name*, so the children
//! of a location are the records whose `parent_location` equals its name.

use camino::Utf8Path;
use locnav_controller::LocationService;
use locnav_core::{
    FetchError, FilterCriteria, Level, LocationId, LocationRecord, User,
};
use serde::Deserialize;
use tracing::debug;

/// The on-disk dataset layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// All location records, root and nested alike.
    #[serde(default)]
    pub locations: Vec<LocationRecord>,

    /// The levels reference table.
    #[serde(default)]
    pub levels: Vec<Level>,

    /// The users reference table.
    #[serde(default)]
    pub users: Vec<User>,
}

/// A [`LocationService`] over a JSON dataset loaded into memory.
#[derive(Debug, Clone)]
pub struct JsonDataService {
    data: Dataset,
}

impl JsonDataService {
    /// Loads the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, FetchError> {
        let contents = std::fs::read_to_string(path)?;
        let data: Dataset = serde_json::from_str(&contents)?;
        debug!(
            locations = data.locations.len(),
            levels = data.levels.len(),
            users = data.users.len(),
            "Loaded dataset"
        );
        Ok(Self { data })
    }

    /// Creates a service directly from an in-memory dataset.
    #[must_use]
    pub const fn new(data: Dataset) -> Self {
        Self { data }
    }

    /// Returns `true` if the record matches every filter criterion.
    ///
    /// `name` and `parent_location` match by substring; `CIAM` matches the
    /// record's external id exactly. Unknown criteria match nothing, the
    /// conservative reading of a filter the backend does not understand.
    fn matches(record: &LocationRecord, filter: &FilterCriteria) -> bool {
        filter.iter().all(|(key, value)| match key.as_str() {
            "name" => record.name.contains(value.as_str()),
            "parent_location" => record
                .parent_location
                .as_deref()
                .is_some_and(|p| p.contains(value.as_str())),
            "CIAM" => record.id.as_str() == value,
            _ => false,
        })
    }

    fn children_of(&self, parent_name: &str, filter: &FilterCriteria) -> Vec<LocationRecord> {
        self.data
            .locations
            .iter()
            .filter(|r| r.parent_location.as_deref() == Some(parent_name))
            .filter(|r| Self::matches(r, filter))
            .cloned()
            .collect()
    }
}

impl LocationService for JsonDataService {
    /// The root listing spans all locations; the parent column is what the
    /// `parent_location` criterion filters on.
    async fn fetch_root(
        &self,
        filter: FilterCriteria,
    ) -> Result<Vec<LocationRecord>, FetchError> {
        Ok(self
            .data
            .locations
            .iter()
            .filter(|r| Self::matches(r, &filter))
            .cloned()
            .collect())
    }

    async fn fetch_children(
        &self,
        location_id: LocationId,
        filter: FilterCriteria,
    ) -> Result<Vec<LocationRecord>, FetchError> {
        let parent = self
            .data
            .locations
            .iter()
            .find(|r| r.id == location_id)
            .ok_or_else(|| FetchError::not_found(format!("location {location_id}")))?;

        Ok(self.children_of(parent.name.as_str(), &filter))
    }

    async fn fetch_levels(&self) -> Result<Vec<Level>, FetchError> {
        Ok(self.data.levels.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        Ok(self.data.users.clone())
    }
}
