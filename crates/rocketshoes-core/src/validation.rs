//! # Validation Module
//!
//! Invariant checks for carts that did not come from cart operations.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart operations (add / remove / update)                               │
//! │  └── Keep invariants by construction, no validation pass               │
//! │                                                                         │
//! │  Slot load at startup                                                  │
//! │  └── THIS MODULE: reject carts with duplicate ids or amounts < 1       │
//! │      (written by older clients, edited by hand, truncated, ...)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Product, ProductId};
use crate::MIN_ITEM_AMOUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single cart line amount.
///
/// ## Example
/// ```rust
/// use rocketshoes_core::validation::validate_amount;
///
/// assert!(validate_amount(1, 1).is_ok());
/// assert!(validate_amount(1, 0).is_err());
/// ```
pub fn validate_amount(product_id: ProductId, amount: i64) -> ValidationResult<()> {
    if amount < MIN_ITEM_AMOUNT {
        return Err(ValidationError::AmountTooSmall {
            product_id,
            amount,
            min: MIN_ITEM_AMOUNT,
        });
    }
    Ok(())
}

/// Validates a full list of cart lines.
///
/// ## Rules
/// - Every product id appears at most once
/// - Every amount is at least [`MIN_ITEM_AMOUNT`]
pub fn validate_items(items: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id) {
            return Err(ValidationError::DuplicateProduct(item.id));
        }
        validate_amount(item.id, item.amount)?;
    }

    Ok(())
}
