/// A product as served by the remote Catalog Service.
///
/// The client never mutates a `Product`; it holds a read-only, possibly stale
/// copy of whatever the last successful `GET /api/products` returned.
///
/// See [`NewProduct`] for the payload sent when creating a product.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Base added to the catalog length when generating a placeholder UPC.
pub const PLACEHOLDER_UPC_BASE: u64 = 100_000_000_000;

/// Name given to every placeholder product.
pub const PLACEHOLDER_NAME: &str = "New Product";

/// Fixed price of every placeholder product.
pub const PLACEHOLDER_PRICE: f64 = 100.0;

/// Opaque product identifier.
///
/// The server owns identity, so either a JSON integer or a JSON string is
/// accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A display-only value that the server may send as a JSON number or string.
///
/// Prices backed by a DECIMAL column, for instance, often arrive as
/// `"250.00"`. Strings are kept verbatim. Numbers are held as `f64`, which is
/// exact for any 12 or 13 digit UPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Scalar,
    pub upc: Scalar,
    // Freshly created products have no stock or image yet.
    #[serde(default)]
    pub inventory: Option<Scalar>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Creates a new Product instance with no inventory or image.
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier
    /// * `name` - Product name
    /// * `price` - Product price
    /// * `upc` - Universal product code
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, upc: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            upc: upc.into(),
            inventory: None,
            image: None,
        }
    }
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub upc: u64,
}

impl NewProduct {
    /// Builds the placeholder product offered by the "create" action.
    ///
    /// The UPC is `PLACEHOLDER_UPC_BASE + catalog_len + 1`. Two clients
    /// looking at the same catalog will generate the same UPC; nothing here
    /// or on the server is assumed to prevent that.
    pub fn placeholder(catalog_len: usize) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            price: PLACEHOLDER_PRICE,
            upc: PLACEHOLDER_UPC_BASE + catalog_len as u64 + 1,
        }
    }
}
