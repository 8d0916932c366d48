//! The location listing screen controller.
//!
//! [`LocationScreen`] owns all state of one screen instance: the
//! breadcrumb trail, the active query, the lookup cache, the filter form,
//! and the derived view rows. The rendering layer talks to it through
//! [`Intent`]s and reads back a [`ViewState`]; asynchronous results come
//! in through [`Event`]s. Nothing here performs I/O.
//!
//! # Architecture
//!
//! ```text
//! LocationScreen
//!  ├── nav: NavigationStack      # Breadcrumb trail
//!  ├── query: QueryController    # Scope + filter + fetch state
//!  ├── cache: LookupCache        # Levels and users, loaded once
//!  ├── form: FilterForm          # Schema-driven filter inputs
//!  └── joined: Option<Vec<LocationRow>>  # Derived view rows
//! ```

use locnav_core::{
    Breadcrumb, FieldSpec, ListingScope, LocationId, LocationRow, ScreenConfig,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::event::Event;
use crate::filter::FilterForm;
use crate::intent::{Effect, Intent};
use crate::join::{join, LookupCache};
use crate::nav::{BackOutcome, NavigationStack};
use crate::query::{Completion, FetchTicket, QueryController};

/// The derived view-model consumed by the rendering layer.
///
/// A plain snapshot: cheap to produce, trivially serializable, and free of
/// references into controller state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Ordered trail of visited locations, oldest first.
    pub breadcrumb_trail: Vec<Breadcrumb>,

    /// Joined rows of the latest successful fetch; empty while the
    /// lookups are still loading.
    pub rows: Vec<LocationRow>,

    /// `true` while a fetch is in flight or the lookups have not
    /// completed their initial load.
    pub loading: bool,

    /// Failure reason of the last applied fetch, if it failed.
    pub error: Option<String>,

    /// `true` when back navigation would change anything.
    pub can_go_back: bool,

    /// `true` when the filter form applies to the active listing
    /// (the form is only offered on the root listing).
    pub shows_filter: bool,
}

/// State controller for one instance of the location listing screen.
#[derive(Debug, Clone, Default)]
pub struct LocationScreen {
    nav: NavigationStack,
    query: QueryController,
    cache: LookupCache,
    form: FilterForm,
    joined: Option<Vec<LocationRow>>,
    pending: Vec<FetchTicket>,
}

impl LocationScreen {
    /// Creates a screen with the given filter field schema.
    #[must_use]
    pub fn new(schema: Vec<FieldSpec>) -> Self {
        Self {
            nav: NavigationStack::new(),
            query: QueryController::new(),
            cache: LookupCache::new(),
            form: FilterForm::new(schema),
            joined: None,
            pending: Vec::new(),
        }
    }

    /// Creates a screen from the screen configuration section.
    #[must_use]
    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(config.filter_fields.clone())
    }

    /// Issues the initial root listing fetch.
    ///
    /// The lookup loads are fired separately by the driver; they carry no
    /// generation because they happen once per session.
    pub fn startup(&mut self) {
        let ticket = self.query.refetch();
        self.pending.push(ticket);
    }

    /// Handles a user intent, returning the outward-facing effect.
    ///
    /// Fetches scheduled while handling are collected internally; the
    /// driver drains them with [`take_fetches`](Self::take_fetches).
    pub fn handle(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::SelectRow(id) => self.select_row(&id),
            Intent::GoBack => self.go_back(),
            Intent::Reset => self.reset(),
            Intent::SetFilterField { key, value } => {
                self.form.set_field(&key, value);
                Effect::None
            }
            Intent::SubmitFilter => {
                let ticket = self.query.set_filter(self.form.submit());
                self.pending.push(ticket);
                Effect::None
            }
            Intent::ClearFilter => {
                self.form.clear();
                let ticket = self.query.set_filter(self.form.submit());
                self.pending.push(ticket);
                Effect::None
            }
            Intent::AddNew => self.add_new(),
            Intent::RequestDetail(id) => self
                .joined_row(&id)
                .map_or(Effect::None, |row| Effect::ShowDetail(row.clone())),
            Intent::RequestDelete(id) => self
                .joined_row(&id)
                .map_or(Effect::None, |row| Effect::ConfirmDelete(row.clone())),
            Intent::ConfirmDelete(id) => {
                debug!(%id, "Delete confirmed; refreshing listing");
                let ticket = self.query.refetch();
                self.pending.push(ticket);
                Effect::None
            }
            Intent::Refresh => {
                let ticket = self.query.refetch();
                self.pending.push(ticket);
                Effect::None
            }
            Intent::None => Effect::None,
        }
    }

    /// Applies a completed asynchronous operation.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::ListFetched { generation, result } => {
                if self.query.complete(generation, result) == Completion::Applied {
                    self.rejoin();
                }
            }
            Event::LevelsFetched(result) => {
                self.cache.load_levels(result);
                self.rejoin();
            }
            Event::UsersFetched(result) => {
                self.cache.load_users(result);
                self.rejoin();
            }
        }
    }

    /// Drains the fetches scheduled since the last call.
    pub fn take_fetches(&mut self) -> Vec<FetchTicket> {
        std::mem::take(&mut self.pending)
    }

    /// Produces the view-model snapshot for the rendering layer.
    #[must_use]
    pub fn view(&self) -> ViewState {
        ViewState {
            breadcrumb_trail: self.nav.trail().to_vec(),
            rows: self.joined.clone().unwrap_or_default(),
            loading: self.query.is_loading() || !self.cache.is_ready(),
            error: self.query.error().map(str::to_owned),
            can_go_back: !self.nav.is_root(),
            shows_filter: self.query.scope().is_root(),
        }
    }

    /// Returns the breadcrumb trail, oldest first.
    #[must_use]
    pub fn trail(&self) -> &[Breadcrumb] {
        self.nav.trail()
    }

    /// Returns the active listing scope.
    #[must_use]
    pub const fn scope(&self) -> &ListingScope {
        self.query.scope()
    }

    /// Returns the filter form for inspection.
    #[must_use]
    pub const fn filter_form(&self) -> &FilterForm {
        &self.form
    }

    fn select_row(&mut self, id: &LocationId) -> Effect {
        let Some(record) = self.query.rows().iter().find(|r| &r.id == id) else {
            warn!(%id, "Select ignored; row not in the current listing");
            return Effect::None;
        };

        let frame = Breadcrumb::new(record.id.clone(), record.name.clone());
        self.drill_into(frame);
        Effect::None
    }

    /// Navigates back along the trail.
    ///
    /// Reproduces the original screen's observed behavior: at depth 1 the
    /// root listing is restored; at depth >= 2 the trail pops twice and
    /// re-enters at the frame below, which nets out to a single level up.
    fn go_back(&mut self) -> Effect {
        match self.nav.step_back() {
            BackOutcome::AtRoot => {}
            BackOutcome::ToRoot => {
                let ticket = self.query.reset();
                self.pending.push(ticket);
            }
            BackOutcome::ReEnter(previous) => {
                self.drill_into(previous);
            }
        }
        Effect::None
    }

    fn reset(&mut self) -> Effect {
        self.nav.pop_to_root();
        let ticket = self.query.reset();
        self.pending.push(ticket);
        Effect::None
    }

    /// Produces the routing target for the add-location flow.
    ///
    /// The target is parameterized by the current trail tail so the new
    /// location is created under the location being viewed; at root the
    /// parent segment is the literal `null`, as the original routes it.
    fn add_new(&self) -> Effect {
        let parent = self
            .nav
            .current()
            .map_or_else(|| "null".to_owned(), |frame| frame.id.to_string());
        Effect::RouteTo(format!("/location/add/{parent}"))
    }

    fn drill_into(&mut self, frame: Breadcrumb) {
        let scope = ListingScope::children(frame.id.clone());
        self.nav.push(frame);
        let ticket = self.query.set_scope(scope);
        self.pending.push(ticket);
    }

    fn joined_row(&self, id: &LocationId) -> Option<&LocationRow> {
        let rows = self.joined.as_ref()?;
        let row = rows.iter().find(|r| &r.record.id == id);
        if row.is_none() {
            warn!(%id, "Row not present in the joined view");
        }
        row
    }

    fn rejoin(&mut self) {
        self.joined = join(self.query.rows(), &self.cache);
    }
}
