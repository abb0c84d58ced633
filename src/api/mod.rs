//! Catalog backend boundary.
//!
//! The storefront consumes three endpoints:
//!
//! - `POST /api/seed` populates an empty catalog (best effort)
//! - `GET /api/categories` returns `{ items: string[] }`
//! - `GET /api/products?search=&category=` returns `{ items: Product[] }`

mod client;
mod error;
mod types;

use async_trait::async_trait;

pub use client::HttpCatalog;
pub use error::{ApiError, Endpoint};
pub use types::{Product, ProductId, ProductQuery};

/// Source of catalog data.
///
/// Implemented by [`HttpCatalog`] in production; tests substitute scripted
/// implementations to control resolution order.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Ask the backend to seed sample products if its catalog is empty.
    async fn seed(&self) -> Result<(), ApiError>;

    /// Category names in backend order.
    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    /// Products matching `query`.
    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError>;
}
