//! # Sync Controller
//!
//! Orchestrates the two user-facing operations against the
//! [`CatalogService`] and records their results in the
//! [`CatalogStore`](crate::store::CatalogStore):
//!
//! - [`SyncController::refresh`] - fetch the whole catalog and replace the
//!   store contents.
//! - [`SyncController::create_placeholder`] - submit a placeholder product,
//!   then refresh regardless of how the submission went.
//!
//! Neither operation retries. A failed fetch leaves the store in
//! `ErrorOccurred` until the next refresh; a failed create is only logged.

pub mod error;

pub use error::ControllerError;

use crate::model::{NewProduct, SyncState};
use crate::service::CatalogService;
use crate::store::{FetchOutcome, RefreshOutcome, StoreClient};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

pub struct SyncController<S: CatalogService> {
    service: Arc<S>,
    store: StoreClient,
}

impl<S: CatalogService> Clone for SyncController<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            store: self.store.clone(),
        }
    }
}

impl<S: CatalogService> SyncController<S> {
    pub fn new(service: S, store: StoreClient) -> Self {
        Self {
            service: Arc::new(service),
            store,
        }
    }

    /// Fetches the catalog and hands the result to the store.
    ///
    /// The store decides whether the response is still current; see
    /// [`RefreshOutcome::Superseded`].
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshOutcome, ControllerError> {
        let ticket = self.store.begin_refresh().await?;
        debug!(%ticket, "Fetching catalog");

        let outcome = match self.service.list_products().await {
            Ok(catalog) => FetchOutcome::Fetched(catalog),
            Err(e) => {
                warn!(%ticket, error = %e, "List failed");
                FetchOutcome::Failed
            }
        };

        let result = self.store.complete_refresh(ticket, outcome).await?;
        info!(%ticket, ?result, "Refresh complete");
        Ok(result)
    }

    /// Creates a "New Product" placeholder and refreshes afterwards.
    ///
    /// The UPC is derived from the catalog length the store holds right now
    /// (zero if nothing has loaded), so it is only as fresh as the last
    /// successful fetch.
    #[instrument(skip(self))]
    pub async fn create_placeholder(&self) -> Result<RefreshOutcome, ControllerError> {
        let len = self
            .store
            .snapshot()
            .await?
            .catalog()
            .map_or(0, Vec::len);
        let product = NewProduct::placeholder(len);
        info!(upc = product.upc, "Creating placeholder");

        if let Err(e) = self.service.create_product(product).await {
            warn!(error = %e, "Create failed");
        }

        self.refresh().await
    }

    /// Current store state.
    pub async fn snapshot(&self) -> Result<SyncState, ControllerError> {
        Ok(self.store.snapshot().await?)
    }

    /// Observe store transitions.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.store.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::service::mock::MockCatalogService;
    use crate::service::ServiceError;
    use crate::store::CatalogStore;
    use reqwest::StatusCode;

    fn start(mock: &MockCatalogService) -> SyncController<MockCatalogService> {
        let (store, client) = CatalogStore::new(8);
        tokio::spawn(store.run());
        SyncController::new(mock.clone(), client)
    }

    #[tokio::test]
    async fn test_refresh_loads_catalog() {
        let mock = MockCatalogService::new();
        mock.expect_list().return_ok(vec![Product::new(1, "Lamp", 19.5, 42)]);
        let controller = start(&mock);

        let outcome = controller.refresh().await.unwrap();

        assert_eq!(outcome, RefreshOutcome::Applied);
        let state = controller.snapshot().await.unwrap();
        assert_eq!(state.catalog().map(Vec::len), Some(1));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_before_first_load_uses_zero_length() {
        let mock = MockCatalogService::new();
        mock.expect_create().return_ok();
        mock.expect_list().return_ok(vec![]);
        let controller = start(&mock);

        controller.create_placeholder().await.unwrap();

        assert_eq!(mock.created()[0].upc, 100_000_000_001);
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_create_still_refreshes() {
        let mock = MockCatalogService::new();
        mock.expect_create()
            .return_err(ServiceError::Status(StatusCode::SERVICE_UNAVAILABLE));
        mock.expect_list().return_ok(vec![Product::new(1, "Lamp", 19.5, 42)]);
        let controller = start(&mock);

        let outcome = controller.create_placeholder().await.unwrap();

        assert_eq!(outcome, RefreshOutcome::Applied);
        mock.verify();
    }
}
