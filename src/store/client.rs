//! # Store Client
//!
//! Cloneable handle for the [`CatalogStore`](crate::store::CatalogStore) actor.

use super::error::StoreError;
use super::message::{FetchOutcome, RefreshOutcome, RefreshTicket, StoreRequest};
use crate::model::SyncState;
use tokio::sync::{mpsc, oneshot, watch};

/// Async API over the store's request channel.
///
/// Holds a sender and a `watch` receiver, so cloning is cheap. The actor
/// exits once every clone has been dropped; outstanding [`subscribe`]
/// receivers do not keep it alive.
///
/// [`subscribe`]: StoreClient::subscribe
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
    watcher: watch::Receiver<SyncState>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>, watcher: watch::Receiver<SyncState>) -> Self {
        Self { sender, watcher }
    }

    pub async fn snapshot(&self) -> Result<SyncState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Observe every state the store publishes.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.watcher.clone()
    }

    pub async fn begin_refresh(&self) -> Result<RefreshTicket, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::BeginRefresh { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    pub async fn complete_refresh(
        &self,
        ticket: RefreshTicket,
        outcome: FetchOutcome,
    ) -> Result<RefreshOutcome, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::CompleteRefresh {
                ticket,
                outcome,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }
}
