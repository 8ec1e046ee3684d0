//! # Catalog Service
//!
//! The remote backend that owns product records, seen through the
//! [`CatalogService`] trait. The controller only depends on the trait, so
//! the real HTTP client and the test double are interchangeable.
//!
//! - [`HttpCatalogService`] - `GET`/`POST /api/products` over reqwest
//! - [`mock::MockCatalogService`] - scripted responses for tests

pub mod error;
pub mod http;
pub mod mock;

pub use error::ServiceError;
pub use http::HttpCatalogService;

use crate::model::{Catalog, NewProduct};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogService: Send + Sync + 'static {
    /// Fetch the full catalog in server order.
    async fn list_products(&self) -> Result<Catalog, ServiceError>;

    /// Submit a new product. Only completion matters; the response body is ignored.
    async fn create_product(&self, product: NewProduct) -> Result<(), ServiceError>;
}
