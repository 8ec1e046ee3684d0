//! # Catalog Viewer
//!
//! > **A small client for a remote product catalog.**
//!
//! Fetches the product list from `GET /api/products`, renders it as a table,
//! and creates placeholder products with `POST /api/products`, refreshing the
//! view afterwards.
//!
//! ## 🏗️ Design
//!
//! ### An explicit store instead of component state
//! The catalog lives in a single store actor ([`store::CatalogStore`]). It is
//! the only writer of the [`SyncState`](model::SyncState); the view only reads
//! it (via `watch`), and the controller only talks to it through messages.
//!
//! ### Sequenced refreshes
//! Every refresh takes a ticket from the store before hitting the network.
//! A response is applied only if its ticket is still the latest, so a slow
//! answer to an old refresh cannot overwrite newer data.
//!
//! ### Failures are states, not errors
//! A failed fetch moves the store to `ErrorOccurred` and keeps whatever
//! catalog was loaded before. Nothing is retried; the next refresh clears
//! the error. A failed create is logged and followed by a refresh anyway.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Product`, `NewProduct`, `SyncState` and its reducer.
//! - [`store`]: the store actor, its client, and the refresh tickets.
//! - [`service`]: the [`CatalogService`](service::CatalogService) seam, the reqwest
//!   implementation, and a scripted mock for tests.
//! - [`controller`]: `refresh` and `create_placeholder`.
//! - [`view`]: pure rendering of a state into text.
//! - [`session`]: the interactive command loop and the deduplicating renderer.
//! - [`lifecycle`]: spawning, mounting and shutting down; tracing setup.
//! - [`config`]: base URL and timeouts.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the catalog once
//! RUST_LOG=info cargo run -- --base-url http://localhost:8080 list
//!
//! # Refresh/create from the keyboard
//! cargo run -- interactive
//! ```

pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod session;
pub mod store;
pub mod view;
