//! # Cart
//!
//! The cart and its transitions, as pure functions.
//!
//! Every transition takes `&self` and returns a new `Cart`, so callers can
//! persist the result before installing it. A failed transition leaves
//! nothing to roll back.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Transitions                                  │
//! │                                                                         │
//! │  increment(id, stock) ──► amount + 1, checked against stock            │
//! │  with_new_product(p)  ──► append p with amount 1 (no stock check)       │
//! │  without(id)          ──► drop the line, NotInCart if absent           │
//! │  with_amount(id, n, stock)                                              │
//! │                       ──► set amount n, checked against stock;         │
//! │                           n < 1 or absent id leaves the cart as is     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id
//! - Every amount is at least 1

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult, StorageResult};
use crate::money::Money;
use crate::types::{Product, ProductId, Stock};
use crate::validation::{self, ValidationResult};
use crate::MIN_ITEM_AMOUNT;

/// The shopping cart.
///
/// Serializes as a bare JSON array of products, which is the slot format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from existing lines, checking the invariants.
    pub fn from_items(items: Vec<Product>) -> ValidationResult<Self> {
        validation::validate_items(&items)?;
        Ok(Cart { items })
    }

    /// Decodes a slot value written by [`Cart::to_slot_value`].
    ///
    /// ## Returns
    /// - `Err(StorageError::Codec)` if the value is not a product array
    /// - `Err(StorageError::Invalid)` if it breaks a cart invariant
    pub fn from_slot_value(value: &str) -> StorageResult<Self> {
        let items: Vec<Product> = serde_json::from_str(value)?;
        Ok(Cart::from_items(items)?)
    }

    /// Encodes the cart in the slot format.
    pub fn to_slot_value(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Amount of a product in the cart, 0 when absent.
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map_or(0, |p| p.amount)
    }

    /// Amount per product id, for badging product listings.
    pub fn amounts(&self) -> BTreeMap<ProductId, i64> {
        self.items.iter().map(|p| (p.id, p.amount)).collect()
    }

    /// Summary totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one more unit of a product already in the cart.
    ///
    /// ## Returns
    /// - `Err(CartError::NotInCart)` if the product has no line
    /// - `Err(CartError::OutOfStock)` if amount + 1 exceeds `stock`
    pub fn increment(&self, product_id: ProductId, stock: &Stock) -> CartResult<Cart> {
        let current = self
            .get(product_id)
            .ok_or(CartError::NotInCart(product_id))?;

        // No stock can hold more than i64::MAX units.
        let candidate = current
            .amount
            .checked_add(1)
            .ok_or(CartError::OutOfStock {
                product_id,
                requested: i64::MAX,
                available: stock.amount,
            })?;
        stock.ensure_available(candidate)?;

        Ok(self.map_line(product_id, candidate))
    }

    /// Appends a product with amount 1.
    ///
    /// No stock check happens here. A product whose id is already in the
    /// cart leaves the cart unchanged.
    pub fn with_new_product(&self, product: Product) -> Cart {
        if self.contains(product.id) {
            return self.clone();
        }

        let mut items = self.items.clone();
        items.push(product.with_amount(MIN_ITEM_AMOUNT));
        Cart { items }
    }

    /// Removes a product's line.
    pub fn without(&self, product_id: ProductId) -> CartResult<Cart> {
        if !self.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        let items = self
            .items
            .iter()
            .filter(|p| p.id != product_id)
            .cloned()
            .collect();
        Ok(Cart { items })
    }

    /// Sets a product's line to exactly `amount`.
    ///
    /// ## Behavior
    /// - `amount < 1`: cart returned unchanged, stock not consulted
    /// - `amount > stock.amount`: `Err(CartError::OutOfStock)`
    /// - product absent: cart returned unchanged, no line is created
    pub fn with_amount(&self, product_id: ProductId, amount: i64, stock: &Stock) -> CartResult<Cart> {
        if amount < MIN_ITEM_AMOUNT {
            return Ok(self.clone());
        }

        stock.ensure_available(amount)?;

        Ok(self.map_line(product_id, amount))
    }

    fn map_line(&self, product_id: ProductId, amount: i64) -> Cart {
        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == product_id {
                    p.with_amount(amount)
                } else {
                    p.clone()
                }
            })
            .collect();
        Cart { items }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Cart summary shown in the storefront header and cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Number of distinct products.
    pub item_count: u32,

    /// Sum of all amounts.
    #[ts(type = "number")]
    pub total_amount: i64,

    /// Sum of price × amount over all lines.
    #[ts(type = "number")]
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len() as u32,
            total_amount: cart
                .items
                .iter()
                .fold(0i64, |acc, p| acc.saturating_add(p.amount)),
            subtotal: cart.items.iter().map(Product::subtotal).sum(),
        }
    }
}
