//! # Storefront API Client
//!
//! HTTP client for the inventory and catalog endpoints of the storefront
//! API.
//!
//! ## Endpoints
//! ```text
//! GET {base_url}/stock/{id}     → { "id": 1, "amount": 3 }
//! GET {base_url}/products/{id}  → { "id": 1, "title": "...", "price": 179.9, "image": "..." }
//! ```
//!
//! ## Error Mapping
//! ```text
//! transport / timeout   → ServiceError::Network
//! HTTP 404              → ServiceError::NotFound
//! other non-2xx         → ServiceError::Status
//! body not the DTO      → ServiceError::Decode
//! ```
//!
//! The returned product is passed through as-is; `CartManager` rejects a
//! product whose id differs from the one requested.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use rocketshoes_core::{
    CatalogService, InventoryService, Product, ProductId, ServiceError, ServiceResult, Stock,
};

use crate::state::ApiSettings;

/// HTTP client implementing both [`InventoryService`] and
/// [`CatalogService`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the `[api]` configuration section.
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, reqwest::Error> {
        Self::new(&settings.base_url, settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        path: &str,
        id: ProductId,
    ) -> ServiceResult<T> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(url = %url, error = %e, "Request failed");
            ServiceError::Network(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ServiceError::not_found(resource, id));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InventoryService for ApiClient {
    async fn stock(&self, product_id: ProductId) -> ServiceResult<Stock> {
        self.get_json("Stock", "stock", product_id).await
    }
}

#[async_trait]
impl CatalogService for ApiClient {
    async fn product(&self, product_id: ProductId) -> ServiceResult<Product> {
        self.get_json("Product", "products", product_id).await
    }
}
