//! Runtime configuration for the viewer.
//!
//! There is nothing to persist: a base URL, a request timeout and the size of
//! the store's request channel. The CLI fills these from flags or the
//! `CATALOG_BASE_URL` / `CATALOG_TIMEOUT_SECS` environment variables.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORE_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Root of the Catalog Service; `api/products` is resolved against it.
    pub base_url: Url,
    /// Upper bound on a single request, connect included.
    pub request_timeout: Duration,
    /// Capacity of the store actor's request channel.
    pub store_buffer: usize,
}

impl ViewerConfig {
    /// Parses and validates `base_url`.
    ///
    /// A trailing slash is added when missing so that a path prefix such as
    /// `http://host/shop` is kept when `api/products` is joined onto it.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            request_timeout,
            store_buffer: DEFAULT_STORE_BUFFER,
        })
    }
}
