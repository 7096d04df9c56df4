//! # rocketshoes-core: Pure Cart Logic for the RocketShoes Storefront
//!
//! This crate holds the cart rules as pure functions plus the traits the
//! storefront app plugs real services into.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Storefront UI / `rocketshoes` CLI                 │   │
//! │  │      Product list ──► Cart page ──► amount +/- ──► remove       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             CartManager (apps/storefront)                       │   │
//! │  │    add_product, remove_product, update_product_amount           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ rocketshoes-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  seams    │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ services  │  │   │
//! │  │   │   Stock   │  │           │  │  Totals   │  │ storage   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        rocketshoes-db (SQLite slots) / HTTP ApiClient           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`types`]: `Product`, `Stock`, `UpdateProductAmount`
//! - [`money`]: integer-cent currency with decimal wire format
//! - [`cart`]: `Cart` and its validated transitions
//! - [`error`]: the error taxonomy for every layer below the app
//! - [`validation`]: invariants checked on persisted carts
//! - [`services`], [`storage`], [`notify`]: seams for I/O and presentation

pub mod cart;
pub mod error;
pub mod money;
pub mod notify;
pub mod services;
pub mod storage;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{
    CartError, CartResult, ServiceError, ServiceResult, StorageError, StorageResult,
    ValidationError,
};
pub use money::Money;
pub use notify::{CartOperation, Notice, NoticeLevel, NoticeLog, Notifier};
pub use services::{CatalogService, InventoryService};
pub use storage::{MemoryStorage, SlotStorage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart slot is written under.
///
/// Existing storefront installs already hold carts under this key, so it is
/// the default for every `SlotStorage` backend.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Smallest amount a cart line may hold.
pub const MIN_ITEM_AMOUNT: i64 = 1;
