//! # Service Seams
//!
//! Read-only lookups the cart depends on. The storefront app provides an
//! HTTP implementation; tests provide in-memory ones.

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::types::{Product, ProductId, Stock};

/// Stock lookup (`GET /stock/{id}`).
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Returns the available quantity of a product.
    async fn stock(&self, product_id: ProductId) -> ServiceResult<Stock>;
}

/// Product lookup (`GET /products/{id}`).
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns catalog details for a product. `amount` is not meaningful.
    async fn product(&self, product_id: ProductId) -> ServiceResult<Product>;
}
