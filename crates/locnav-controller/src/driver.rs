//! Async driver wiring a screen to a data service.
//!
//! The screen controller is synchronous and I/O-free; this module supplies
//! the asynchronous plumbing around it. Every fetch ticket the screen
//! schedules is resolved in a spawned task whose result comes back over a
//! single mpsc channel, tagged with the generation it belongs to. Dropping
//! the driver cancels outstanding tasks and closes the channel, so a
//! late-arriving stale response can never reach a freshly mounted screen
//! instance.
//!
//! ```text
//! ┌──────────────┐  ticket   ┌─────────────────┐  Event   ┌──────────────┐
//! │ LocationScreen├──────────►│ tokio::spawn     ├─────────►│ mpsc::Receiver│
//! │ (sync state)  │◄──────────┤ service call     │          │ → apply()     │
//! └──────────────┘   apply   └─────────────────┘          └──────────────┘
//! ```

use std::sync::Arc;

use locnav_core::Config;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::ControllerError;
use crate::event::Event;
use crate::intent::{Effect, Intent};
use crate::query::FetchTicket;
use crate::screen::{LocationScreen, ViewState};
use crate::service::LocationService;

/// Drives one [`LocationScreen`] against a [`LocationService`].
pub struct ScreenDriver<S> {
    screen: LocationScreen,
    service: Arc<S>,
    event_tx: mpsc::Sender<Event>,
    event_rx: mpsc::Receiver<Event>,
    cancel: CancellationToken,
    in_flight: usize,
}

impl<S: LocationService> ScreenDriver<S> {
    /// Creates a driver for a fresh screen instance.
    #[must_use]
    pub fn new(service: S, config: &Config) -> Self {
        let (event_tx, event_rx) = mpsc::channel(config.service.channel_capacity);
        Self {
            screen: LocationScreen::from_config(&config.screen),
            service: Arc::new(service),
            event_tx,
            event_rx,
            cancel: CancellationToken::new(),
            in_flight: 0,
        }
    }

    /// Fires the one-shot lookup loads and the initial root listing fetch.
    pub fn startup(&mut self) {
        debug!("Starting screen: lookup loads + initial root fetch");
        self.spawn_levels();
        self.spawn_users();
        self.screen.startup();
        self.dispatch_pending();
    }

    /// Applies a user intent, spawning any fetches it scheduled.
    pub fn handle(&mut self, intent: Intent) -> Effect {
        let effect = self.screen.handle(intent);
        self.dispatch_pending();
        effect
    }

    /// Waits for one completion event and applies it to the screen.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::ChannelClosed`] if the event channel
    /// closed while fetches were outstanding.
    pub async fn pump(&mut self) -> Result<(), ControllerError> {
        let event = self
            .event_rx
            .recv()
            .await
            .ok_or(ControllerError::ChannelClosed)?;
        trace!(?event, "Applying completion event");
        self.in_flight = self.in_flight.saturating_sub(1);
        self.screen.apply(event);
        Ok(())
    }

    /// Pumps events until no fetch is outstanding.
    ///
    /// Intents handled while draining may spawn further fetches; those are
    /// drained too.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::ChannelClosed`] if the channel closed
    /// early.
    pub async fn run_until_idle(&mut self) -> Result<(), ControllerError> {
        while self.in_flight > 0 {
            self.pump().await?;
        }
        Ok(())
    }

    /// Produces the current view-model snapshot.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.screen.view()
    }

    /// Returns the underlying screen for inspection.
    #[must_use]
    pub const fn screen(&self) -> &LocationScreen {
        &self.screen
    }

    /// Cancels outstanding fetch tasks.
    ///
    /// Results that were already queued are dropped with the receiver when
    /// the driver itself is dropped.
    pub fn shutdown(&mut self) {
        debug!(in_flight = self.in_flight, "Shutting down screen driver");
        self.cancel.cancel();
        self.in_flight = 0;
    }

    fn dispatch_pending(&mut self) {
        for ticket in self.screen.take_fetches() {
            self.spawn_list_fetch(ticket);
        }
    }

    fn spawn_list_fetch(&mut self, ticket: FetchTicket) {
        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let cancel = self.cancel.clone();
        self.in_flight += 1;

        trace!(generation = ticket.generation.as_u64(), "Spawning list fetch");
        tokio::spawn(async move {
            let FetchTicket {
                generation,
                scope,
                filter,
            } = ticket;

            tokio::select! {
                () = cancel.cancelled() => {}
                result = async {
                    match scope.location_id() {
                        None => service.fetch_root(filter).await,
                        Some(id) => service.fetch_children(id.clone(), filter).await,
                    }
                } => {
                    let _ = tx.send(Event::ListFetched { generation, result }).await;
                }
            }
        });
    }

    fn spawn_levels(&mut self) {
        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let cancel = self.cancel.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                result = service.fetch_levels() => {
                    let _ = tx.send(Event::LevelsFetched(result)).await;
                }
            }
        });
    }

    fn spawn_users(&mut self) {
        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let cancel = self.cancel.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                result = service.fetch_users() => {
                    let _ = tx.send(Event::UsersFetched(result)).await;
                }
            }
        });
    }
}

impl<S> Drop for ScreenDriver<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
