//! Error types for the Catalog Service.

use thiserror::Error;

/// Failures talking to the remote Catalog Service.
///
/// The controller collapses all of these into a single
/// `ErrorOccurred` state; the variants exist for logging.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("Catalog service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Catalog service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid product list.
    #[error("Catalog response decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
