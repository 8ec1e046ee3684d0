//! # Store Messages
//!
//! Requests sent from [`StoreClient`](crate::store::StoreClient) to the
//! [`CatalogStore`](crate::store::CatalogStore) actor, and the small value
//! types they carry.

use crate::model::{Catalog, SyncState};
use std::fmt::Display;
use tokio::sync::oneshot;

/// One-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<T>;

/// Sequence number handed out when a refresh is issued.
///
/// Tickets increase monotonically; only the most recently issued ticket may
/// change the catalog when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(pub u64);

impl Display for RefreshTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "refresh_{}", self.0)
    }
}

/// Result of the network half of a refresh, as reported to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Fetched(Catalog),
    Failed,
}

/// What the store did with a completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched catalog replaced the previous one.
    Applied,
    /// The fetch failed and the state moved to `ErrorOccurred`.
    Failed,
    /// A newer refresh was issued meanwhile; the response was discarded.
    Superseded,
}

#[derive(Debug)]
pub enum StoreRequest {
    Snapshot {
        respond_to: Response<SyncState>,
    },
    BeginRefresh {
        respond_to: Response<RefreshTicket>,
    },
    CompleteRefresh {
        ticket: RefreshTicket,
        outcome: FetchOutcome,
        respond_to: Response<RefreshOutcome>,
    },
}
