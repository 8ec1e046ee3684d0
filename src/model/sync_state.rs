//! Client-side view of catalog load/error status.
//!
//! [`SyncState`] only ever changes through [`SyncState::reduce`], which makes
//! every transition a pure function of the previous state and a
//! [`SyncEvent`]. The store actor is the only caller.

use super::Product;

/// Ordered products, in server response order.
pub type Catalog = Vec<Product>;

/// What the client currently knows about the catalog.
///
/// There is no explicit "loading" variant: a fetch in flight with nothing
/// loaded yet is simply `Unloaded`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SyncState {
    #[default]
    Unloaded,
    Loaded(Catalog),
    /// The last fetch failed. `stale` keeps the catalog that was loaded
    /// before the failure, if any.
    ErrorOccurred { stale: Option<Catalog> },
}

/// Completion signals that drive [`SyncState`] transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// A refresh was issued; clears the error flag.
    RefreshStarted,
    /// A fetch succeeded; replaces the catalog as a whole.
    Fetched(Catalog),
    /// A fetch failed on transport or decode.
    FetchFailed,
}

impl SyncState {
    pub fn reduce(self, event: SyncEvent) -> Self {
        match (self, event) {
            (Self::ErrorOccurred { stale: Some(catalog) }, SyncEvent::RefreshStarted) => {
                Self::Loaded(catalog)
            }
            (Self::ErrorOccurred { stale: None }, SyncEvent::RefreshStarted) => Self::Unloaded,
            (state, SyncEvent::RefreshStarted) => state,
            (_, SyncEvent::Fetched(catalog)) => Self::Loaded(catalog),
            (Self::Loaded(catalog), SyncEvent::FetchFailed) => Self::ErrorOccurred {
                stale: Some(catalog),
            },
            (Self::Unloaded, SyncEvent::FetchFailed) => Self::ErrorOccurred { stale: None },
            (state @ Self::ErrorOccurred { .. }, SyncEvent::FetchFailed) => state,
        }
    }

    /// The catalog currently held, stale or not.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            Self::ErrorOccurred { stale } => stale.as_ref(),
            Self::Unloaded => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorOccurred { .. })
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unloaded => "unloaded",
            Self::Loaded(_) => "loaded",
            Self::ErrorOccurred { .. } => "error",
        }
    }
}
