//! # Catalog Store
//!
//! The explicit state container behind the view. A [`CatalogStore`] actor
//! owns the [`SyncState`](crate::model::SyncState); everything else talks to
//! it through a [`StoreClient`].
//!
//! ## Sequencing
//!
//! Each refresh takes a [`RefreshTicket`] from the store before it touches
//! the network. When the response comes back, the store applies it only if
//! that ticket is still the latest one issued. A slow response to an older
//! refresh is reported as [`RefreshOutcome::Superseded`] and never
//! overwrites newer data.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_viewer::model::{Product, SyncState};
//! use catalog_viewer::store::{CatalogStore, FetchOutcome, RefreshOutcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = CatalogStore::new(16);
//!     tokio::spawn(store.run());
//!
//!     let ticket = client.begin_refresh().await.unwrap();
//!     let catalog = vec![Product::new(1, "Lamp", 19.5, 1234)];
//!     let outcome = client
//!         .complete_refresh(ticket, FetchOutcome::Fetched(catalog.clone()))
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(outcome, RefreshOutcome::Applied);
//!     assert_eq!(client.snapshot().await.unwrap(), SyncState::Loaded(catalog));
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::CatalogStore;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{FetchOutcome, RefreshOutcome, RefreshTicket, StoreRequest};
