//! # Error Types
//!
//! Error types for the cart domain and the seams around it.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Cart operations (this crate)                                          │
//! │  └── CartError          - Outcome of add / remove / update             │
//! │      ├── OutOfStock     - Requested amount exceeds stock               │
//! │      ├── NotInCart      - Remove on a product the cart lacks           │
//! │      ├── Service ◄───── ServiceError (inventory / catalog lookups)     │
//! │      └── Storage ◄───── StorageError (slot read / write / codec)       │
//! │                                                                         │
//! │  Persisted cart checks                                                 │
//! │  └── ValidationError    - Duplicate ids, amounts below 1               │
//! │                                                                         │
//! │  Flow: ServiceError / StorageError → CartError → Notice → UI           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Errors are enum variants, never String
//! 4. User-facing wording lives in [`crate::notify`], not here

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Cart Error
// =============================================================================

/// Why a cart operation did not change the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Requested amount is larger than the available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart holds 5 × product 1, stock is 5
    ///      │
    ///      ▼
    /// add_product(1) → candidate amount 6
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, requested: 6, available: 5 }
    ///      │
    ///      ▼
    /// UI shows: "Requested amount is out of stock"
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Inventory or catalog lookup failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Persisting the new cart failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Service Error
// =============================================================================

/// Failures from the inventory and catalog services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered 404 for this resource.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: ProductId },

    /// The service answered with any other non-success status.
    #[error("Service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Transport failure (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Catalog answered with a different product than the one requested.
    #[error("Requested product {requested} but service returned {returned}")]
    UnexpectedProduct {
        requested: ProductId,
        returned: ProductId,
    },
}

impl ServiceError {
    /// Creates a NotFound error for a resource type and id.
    pub fn not_found(resource: impl Into<String>, id: ProductId) -> Self {
        ServiceError::NotFound {
            resource: resource.into(),
            id,
        }
    }
}

/// Result type for service lookups.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Storage Error
// =============================================================================

/// Failures reading or writing a persistence slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the read or write.
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The cart could not be encoded to or decoded from the slot format.
    #[error("Cart encoding error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The slot decoded but breaks a cart invariant.
    #[error("Stored cart is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Cart invariant violations.
///
/// Operations never produce these; they guard carts read back from storage,
/// which may have been written by older or foreign code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The same product id appears more than once.
    #[error("Product {0} appears more than once")]
    DuplicateProduct(ProductId),

    /// A line holds less than the minimum amount.
    #[error("Product {product_id} has amount {amount}, must be at least {min}")]
    AmountTooSmall {
        product_id: ProductId,
        amount: i64,
        min: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_message_has_context() {
        let err = CartError::OutOfStock {
            product_id: 7,
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 7: available 5, requested 6"
        );
    }

    #[test]
    fn test_service_error_is_transparent() {
        let err: CartError = ServiceError::not_found("Stock", 3).into();
        assert_eq!(err.to_string(), "Stock not found: 3");
    }
}
