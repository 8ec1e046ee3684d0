use crate::config::{ConfigError, ViewerConfig};
use crate::controller::{ControllerError, SyncController};
use crate::service::{CatalogService, HttpCatalogService};
use crate::store::{CatalogStore, RefreshOutcome};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Runtime orchestrator for the catalog viewer.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it again
/// - **Dependency Wiring**: giving the [`SyncController`] its service and a store client
/// - **Mounting**: issuing the initial fetch without blocking the caller
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::mount(HttpCatalogService::new(&config)?, config.store_buffer);
///
/// // The view subscribes to the store; actions go through the controller
/// let mut updates = system.controller.subscribe();
/// system.controller.create_placeholder().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem<S: CatalogService> {
    /// Entry point for refresh and create.
    pub controller: SyncController<S>,

    store_handle: JoinHandle<()>,
    mount_handle: Option<JoinHandle<Result<RefreshOutcome, ControllerError>>>,
}

impl<S: CatalogService> CatalogSystem<S> {
    /// Starts the store actor and wires a controller to it. No request is issued.
    pub fn new(service: S, store_buffer: usize) -> Self {
        let (store, store_client) = CatalogStore::new(store_buffer);
        let store_handle = tokio::spawn(store.run());

        Self {
            controller: SyncController::new(service, store_client),
            store_handle,
            mount_handle: None,
        }
    }

    /// Like [`new`](Self::new), then fetches the catalog in the background.
    pub fn mount(service: S, store_buffer: usize) -> Self {
        let mut system = Self::new(service, store_buffer);
        let controller = system.controller.clone();
        system.mount_handle = Some(tokio::spawn(async move { controller.refresh().await }));
        info!("Catalog view mounted");
        system
    }

    /// Waits for the initial fetch issued by [`mount`](Self::mount), if any.
    ///
    /// Returns `Ok(None)` when the system was created with [`new`](Self::new)
    /// or the fetch has already been awaited, and an error if the fetch task
    /// panicked.
    pub async fn mounted(
        &mut self,
    ) -> Result<Option<Result<RefreshOutcome, ControllerError>>, LifecycleError> {
        let Some(handle) = self.mount_handle.take() else {
            return Ok(None);
        };
        match handle.await {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                error!("Mount task failed: {:?}", e);
                Err(e.into())
            }
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// In-flight requests are not cancelled: the initial fetch is awaited,
    /// then the controller is dropped, which closes the store's channel once
    /// no other clone is alive.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down catalog view...");

        if let Some(handle) = self.mount_handle {
            if let Err(e) = handle.await {
                error!("Mount task failed: {:?}", e);
                return Err(e.into());
            }
        }

        drop(self.controller);

        if let Err(e) = self.store_handle.await {
            error!("Store task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Catalog view shutdown complete.");
        Ok(())
    }
}

impl CatalogSystem<HttpCatalogService> {
    /// Mounts a view backed by the HTTP service described by `config`.
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ConfigError> {
        let service = HttpCatalogService::new(config)?;
        Ok(Self::mount(service, config.store_buffer))
    }
}
