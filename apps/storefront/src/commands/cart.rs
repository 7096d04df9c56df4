//! # Cart Commands
//!
//! Cart commands exposed through the CLI.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  remove_from_cart            │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────────► (line     │
//! │  │  Cart    │                │          │                     gone)    │
//! │  └──────────┘                └──────────┘                              │
//! │                                │     ▲                                  │
//! │                                └─────┘                                  │
//! │                       add_to_cart / update_cart_item                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed operations leave the cart as it was; the reason goes to the
//! manager's notifier, not into the response.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rocketshoes_core::{CartTotals, Product, ProductId, UpdateProductAmount};

use crate::state::CartManager;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<Product>,
    pub totals: CartTotals,

    /// Subtotal with the configured currency symbol, e.g. "R$ 359.80".
    pub subtotal_display: String,
}

impl CartResponse {
    pub fn new(manager: &CartManager, currency_symbol: &str) -> Self {
        let totals = manager.totals();

        CartResponse {
            items: manager.cart().to_vec(),
            subtotal_display: totals.subtotal.format_with(currency_symbol),
            totals,
        }
    }
}

/// Gets the current cart contents.
pub fn show_cart(manager: &CartManager, currency_symbol: &str) -> CartResponse {
    debug!("show_cart command");
    CartResponse::new(manager, currency_symbol)
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Already in cart: amount goes up by one if stock allows
/// - Not in cart: fetched from the catalog and added with amount 1
pub async fn add_to_cart(
    manager: &mut CartManager,
    product_id: ProductId,
    currency_symbol: &str,
) -> CartResponse {
    debug!(product_id = %product_id, "add_to_cart command");
    manager.add_product(product_id).await;
    CartResponse::new(manager, currency_symbol)
}

/// Removes a product's line from the cart.
pub async fn remove_from_cart(
    manager: &mut CartManager,
    product_id: ProductId,
    currency_symbol: &str,
) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    manager.remove_product(product_id).await;
    CartResponse::new(manager, currency_symbol)
}

/// Sets a product's amount.
///
/// Amounts below 1 are ignored; use `remove_from_cart` to drop a line.
pub async fn update_cart_item(
    manager: &mut CartManager,
    product_id: ProductId,
    amount: i64,
    currency_symbol: &str,
) -> CartResponse {
    debug!(product_id = %product_id, amount = amount, "update_cart_item command");
    manager
        .update_product_amount(UpdateProductAmount { product_id, amount })
        .await;
    CartResponse::new(manager, currency_symbol)
}
