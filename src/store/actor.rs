//! # Catalog Store Actor
//!
//! The store is the single writer of [`SyncState`]. It runs in its own Tokio
//! task and processes [`StoreRequest`]s one at a time, so no lock guards the
//! state. Every transition is published on a `watch` channel for views.

use super::client::StoreClient;
use super::message::{FetchOutcome, RefreshOutcome, RefreshTicket, StoreRequest};
use crate::model::{SyncEvent, SyncState};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Server half of the store: owns the state and the receiving end of the channel.
///
/// # Operations
///
/// * **Snapshot**: returns a clone of the current state.
/// * **BeginRefresh**:
///     1. Issues the next [`RefreshTicket`] and remembers it as the latest.
///     2. Applies [`SyncEvent::RefreshStarted`] (clears the error flag).
/// * **CompleteRefresh**:
///     1. Drops the outcome as `Superseded` unless its ticket is the latest.
///     2. Otherwise applies `Fetched` or `FetchFailed` in one step.
pub struct CatalogStore {
    receiver: mpsc::Receiver<StoreRequest>,
    state: SyncState,
    latest: RefreshTicket,
    publisher: watch::Sender<SyncState>,
}

impl CatalogStore {
    /// Creates the store actor and its client.
    ///
    /// `buffer_size` bounds the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(SyncState::Unloaded);
        let store = Self {
            receiver,
            state: SyncState::Unloaded,
            latest: RefreshTicket(0),
            publisher,
        };
        (store, StoreClient::new(sender, watcher))
    }

    /// Runs the event loop until every [`StoreClient`] has been dropped.
    pub async fn run(mut self) {
        info!("Catalog store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state = self.state.label(), "Snapshot");
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::BeginRefresh { respond_to } => {
                    self.latest = RefreshTicket(self.latest.0 + 1);
                    self.apply(SyncEvent::RefreshStarted);
                    debug!(ticket = %self.latest, "Refresh issued");
                    let _ = respond_to.send(self.latest);
                }
                StoreRequest::CompleteRefresh {
                    ticket,
                    outcome,
                    respond_to,
                } => {
                    let result = self.complete(ticket, outcome);
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(state = self.state.label(), latest = %self.latest, "Catalog store shutdown");
    }

    fn complete(&mut self, ticket: RefreshTicket, outcome: FetchOutcome) -> RefreshOutcome {
        if ticket != self.latest {
            debug!(%ticket, latest = %self.latest, "Discarding superseded response");
            return RefreshOutcome::Superseded;
        }
        match outcome {
            FetchOutcome::Fetched(catalog) => {
                let size = catalog.len();
                self.apply(SyncEvent::Fetched(catalog));
                info!(%ticket, size, "Catalog replaced");
                RefreshOutcome::Applied
            }
            FetchOutcome::Failed => {
                self.apply(SyncEvent::FetchFailed);
                warn!(%ticket, "Catalog fetch failed");
                RefreshOutcome::Failed
            }
        }
    }

    fn apply(&mut self, event: SyncEvent) {
        self.state = std::mem::take(&mut self.state).reduce(event);
        self.publisher.send_replace(self.state.clone());
    }
}
