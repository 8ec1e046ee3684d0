//! # Store Errors
//!
//! The store itself never rejects a request; the only failures are losing
//! the channel to the actor task.

/// Errors raised when talking to the [`CatalogStore`](crate::store::CatalogStore) actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Catalog store closed")]
    StoreClosed,
    #[error("Catalog store dropped response channel")]
    StoreDropped,
}
