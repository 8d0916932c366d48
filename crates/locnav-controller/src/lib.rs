//! Navigation and query state controller for hierarchical location listings.
//!
//! This crate implements the state-machine core of a drill-down listing
//! screen: where the user is in the hierarchy, which listing query is
//! active, how raw rows are joined with reference lookups into
//! display-ready records, and how filter widgets compose into a single
//! query. Rendering, routing, and the actual backend are collaborators
//! behind narrow contracts ([`ViewState`], [`Effect`], [`LocationService`]).
//!
//! # Architecture
//!
//! ```text
//! crates/locnav-controller/src/
//!   lib.rs      # Public API exports
//!   screen.rs   # LocationScreen: owns all per-screen state
//!   nav.rs      # NavigationStack (breadcrumb trail + back policy)
//!   query.rs    # QueryController (scope/filter/generation/fetch state)
//!   join.rs     # LookupCache + denormalizing row joiner
//!   filter.rs   # FilterForm (schema-driven filter inputs)
//!   intent.rs   # Intent/Effect (UI contract)
//!   event.rs    # Completion events from async fetches
//!   service.rs  # LocationService trait (fetch collaborator)
//!   driver.rs   # ScreenDriver (tokio tasks + event channel)
//!   error.rs    # Controller-specific errors
//! ```
//!
//! # Concurrency Model
//!
//! All state lives in one [`LocationScreen`] and is mutated only through
//! its own operations; fetches are the only suspending work. Each issued
//! fetch captures a request generation and a completed result is applied
//! only if no newer fetch has been issued since, which yields
//! last-request-wins ordering without cancelling in-flight calls.
//!
//! # Usage
//!
//! ```ignore
//! use locnav_controller::{Intent, ScreenDriver};
//! use locnav_core::{Config, LocationId};
//!
//! let mut driver = ScreenDriver::new(my_service, &Config::default());
//! driver.startup();
//! driver.run_until_idle().await?;
//!
//! driver.handle(Intent::SelectRow(LocationId::new("42")));
//! driver.run_until_idle().await?;
//! let view = driver.view();
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod driver;
pub mod error;
pub mod event;
pub mod filter;
pub mod intent;
pub mod join;
pub mod nav;
pub mod query;
pub mod screen;
pub mod service;

// Public re-exports
pub use driver::ScreenDriver;
pub use error::ControllerError;
pub use event::Event;
pub use filter::FilterForm;
pub use intent::{Effect, Intent};
pub use join::{join, LookupCache};
pub use nav::{BackOutcome, NavigationStack};
pub use query::{Completion, FetchTicket, Generation, QueryController};
pub use screen::{LocationScreen, ViewState};
pub use service::LocationService;
