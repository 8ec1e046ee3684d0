//! # System Lifecycle
//!
//! Wiring and teardown for the catalog view.
//!
//! 1. **Create** the [`CatalogStore`](crate::store::CatalogStore) actor and spawn its loop.
//! 2. **Wire** a [`SyncController`](crate::controller::SyncController) to the service and the store client.
//! 3. **Mount**: issue the initial fetch in the background.
//! 4. **Shutdown**: wait for the mount fetch, drop the controller, await the store task.
//!
//! The store exits when its last client is dropped, so any controller clone
//! still held elsewhere (a pending CLI task, for instance) keeps it running
//! until that clone goes away.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::setup_tracing;
