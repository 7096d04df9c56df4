//! # Domain Types
//!
//! Core domain types shared by the cart, the services and storage.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │     Stock       │   │ UpdateProductAmount │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │   │  product_id         │   │
//! │  │  title          │   │  amount         │   │  amount (may be ≤0) │   │
//! │  │  price (Money)  │   │  (available)    │   └─────────────────────┘   │
//! │  │  image          │   └─────────────────┘                             │
//! │  │  amount (cart)  │    fetched per check,                             │
//! │  └─────────────────┘    never persisted                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A product as the catalog describes it, plus its amount in the cart.
///
/// The catalog service omits `amount`; it deserializes as 0 and the cart
/// sets it when the product is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog id. Unique within a cart.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,

    /// Image URL.
    pub image: String,

    /// Quantity in the cart.
    #[serde(default)]
    #[ts(type = "number")]
    pub amount: i64,
}

impl Product {
    /// Returns a copy of this product holding `amount`.
    pub fn with_amount(&self, amount: i64) -> Self {
        Product {
            amount,
            ..self.clone()
        }
    }

    /// Line subtotal (unit price × amount).
    pub fn subtotal(&self) -> Money {
        self.price.multiply_quantity(self.amount)
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Available quantity of a product, as reported by the inventory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub id: ProductId,

    #[ts(type = "number")]
    pub amount: i64,
}

impl Stock {
    /// Checks whether `requested` units fit in this stock.
    ///
    /// ## Returns
    /// - `Ok(())` if `requested <= amount`
    /// - `Err(CartError::OutOfStock)` otherwise
    pub fn ensure_available(&self, requested: i64) -> CartResult<()> {
        if requested > self.amount {
            return Err(CartError::OutOfStock {
                product_id: self.id,
                requested,
                available: self.amount,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Update Request
// =============================================================================

/// Request to set a cart line to an exact amount.
///
/// `amount` is signed: the storefront's decrement button can produce 0 or
/// negative values, which the cart ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_product_defaults_amount() {
        let json = r#"{"id":1,"title":"Tênis de Caminhada Leve Confortável","price":179.9,"image":"https://example.com/1.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.amount, 0);
        assert_eq!(product.price.cents(), 17990);
    }

    #[test]
    fn test_subtotal() {
        let product = Product {
            id: 2,
            title: "Tênis VR Caminhada Confortável".to_string(),
            price: Money::from_cents(13990),
            image: String::new(),
            amount: 3,
        };
        assert_eq!(product.subtotal().cents(), 41970);
        assert_eq!(product.with_amount(1).subtotal().cents(), 13990);
    }

    #[test]
    fn test_stock_boundaries() {
        let stock = Stock { id: 1, amount: 5 };

        assert!(stock.ensure_available(5).is_ok());
        assert!(matches!(
            stock.ensure_available(6),
            Err(CartError::OutOfStock {
                product_id: 1,
                requested: 6,
                available: 5
            })
        ));
    }

    #[test]
    fn test_update_request_uses_camel_case() {
        let request: UpdateProductAmount =
            serde_json::from_str(r#"{"productId":4,"amount":-1}"#).unwrap();
        assert_eq!(request.product_id, 4);
        assert_eq!(request.amount, -1);
    }
}
