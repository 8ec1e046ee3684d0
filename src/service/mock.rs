//! # Mock Catalog Service
//!
//! Scripted stand-in for the remote backend, for testing the controller and
//! store without a server.
//!
//! Queue expectations in the order requests will arrive, hand a clone of the
//! mock to the code under test, then call [`MockCatalogService::verify`]:
//!
//! ```rust
//! use catalog_viewer::model::Product;
//! use catalog_viewer::service::mock::MockCatalogService;
//! use catalog_viewer::service::{CatalogService, ServiceError};
//! use reqwest::StatusCode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalogService::new();
//!     mock.expect_list().return_ok(vec![Product::new(1, "Lamp", 19.5, 1234)]);
//!     mock.expect_list()
//!         .return_err(ServiceError::Status(StatusCode::SERVICE_UNAVAILABLE));
//!
//!     assert_eq!(mock.list_products().await.unwrap().len(), 1);
//!     assert!(mock.list_products().await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Controlling arrival order
//!
//! [`ListExpectationBuilder::released_by`] holds a response back until a
//! `oneshot` fires, which makes "second response arrives first" scenarios
//! deterministic.

use super::{CatalogService, ServiceError};
use crate::model::{Catalog, NewProduct};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Gate = Option<oneshot::Receiver<()>>;

enum Expectation {
    List {
        response: Result<Catalog, ServiceError>,
        release: Gate,
    },
    Create {
        response: Result<(), ServiceError>,
        release: Gate,
    },
}

/// A [`CatalogService`] that answers from a queue of expectations.
///
/// Clones share the same queue, so the test can keep one handle for
/// [`verify`](Self::verify) while the controller owns another.
///
/// # Panics
/// A request that does not match the next queued expectation panics the
/// calling task.
#[derive(Clone, Default)]
pub struct MockCatalogService {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<AtomicUsize>,
    created: Arc<Mutex<Vec<NewProduct>>>,
}

impl MockCatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `list_products` request.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
            release: None,
        }
    }

    /// Expects a `create_product` request.
    pub fn expect_create(&self) -> CreateExpectationBuilder {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Number of requests received so far, counted on arrival.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Payloads received by `create_product`, in order.
    pub fn created(&self) -> Vec<NewProduct> {
        self.created.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.expectations.lock().unwrap().pop_front()
    }
}

async fn wait_for(release: Gate) {
    if let Some(release) = release {
        // A dropped sender releases too.
        let _ = release.await;
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn list_products(&self) -> Result<Catalog, ServiceError> {
        match self.next() {
            Some(Expectation::List { response, release }) => {
                wait_for(release).await;
                response
            }
            _ => panic!("Unexpected list_products request or expectation mismatch"),
        }
    }

    async fn create_product(&self, product: NewProduct) -> Result<(), ServiceError> {
        self.created.lock().unwrap().push(product);
        match self.next() {
            Some(Expectation::Create { response, release }) => {
                wait_for(release).await;
                response
            }
            _ => panic!("Unexpected create_product request or expectation mismatch"),
        }
    }
}

/// Builder for `list_products` expectations.
pub struct ListExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    release: Gate,
}

impl ListExpectationBuilder {
    /// Hold the response until `release` fires (or its sender is dropped).
    pub fn released_by(mut self, release: oneshot::Receiver<()>) -> Self {
        self.release = Some(release);
        self
    }

    /// Sets the expectation to return a catalog.
    pub fn return_ok(self, catalog: Catalog) {
        self.push(Ok(catalog));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Catalog, ServiceError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response,
            release: self.release,
        });
    }
}

/// Builder for `create_product` expectations.
pub struct CreateExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl CreateExpectationBuilder {
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(()),
            release: None,
        });
    }

    pub fn return_err(self, error: ServiceError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
            release: None,
        });
    }
}
