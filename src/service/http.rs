//! # HTTP Catalog Service
//!
//! `reqwest` implementation of [`CatalogService`]. A non-2xx status and a
//! body that does not decode as a product list are both errors; nothing is
//! retried.

use super::{CatalogService, ServiceError};
use crate::config::{ConfigError, ViewerConfig};
use crate::model::{Catalog, NewProduct};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument, warn};

/// Path of the product collection, relative to the configured base URL.
pub const PRODUCTS_PATH: &str = "api/products";

#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    http: Client,
    products_url: Url,
}

impl HttpCatalogService {
    /// Builds a client honouring the configured request timeout.
    pub fn new(config: &ViewerConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Self::with_client(http, &config.base_url)
    }

    /// Uses an existing `reqwest::Client`, e.g. one shared with other services.
    pub fn with_client(http: Client, base_url: &Url) -> Result<Self, ConfigError> {
        let products_url = base_url
            .join(PRODUCTS_PATH)
            .map_err(|e| ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { http, products_url })
    }

    pub fn products_url(&self) -> &Url {
        &self.products_url
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[instrument(skip(self), fields(url = %self.products_url))]
    async fn list_products(&self) -> Result<Catalog, ServiceError> {
        debug!("Sending request");
        let response = self.http.get(self.products_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "List rejected");
            return Err(ServiceError::Status(status));
        }

        // Decode separately so a malformed body is reported as such.
        let body = response.bytes().await?;
        let catalog: Catalog = serde_json::from_slice(&body)?;
        debug!(size = catalog.len(), "List decoded");
        Ok(catalog)
    }

    #[instrument(skip(self), fields(url = %self.products_url))]
    async fn create_product(&self, product: NewProduct) -> Result<(), ServiceError> {
        debug!(?product, "Sending request");
        let response = self
            .http
            .post(self.products_url.clone())
            .json(&product)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Create rejected");
            return Err(ServiceError::Status(status));
        }
        Ok(())
    }
}
