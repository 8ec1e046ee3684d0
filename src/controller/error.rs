//! Error types for the Sync Controller.

use crate::store::StoreError;
use thiserror::Error;

/// Errors returned by [`SyncController`](crate::controller::SyncController).
///
/// Service failures are not errors here: they end up in the store as
/// `ErrorOccurred`. Only losing the store itself is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Catalog store unavailable: {0}")]
    Store(#[from] StoreError),
}
