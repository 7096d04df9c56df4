//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────────────┐    │
//! │  │  StorefrontConfig    │          │  CartManager                 │    │
//! │  │                      │  builds  │                              │    │
//! │  │  [api]      ─────────┼────────► │  cart: Cart                  │    │
//! │  │  [cart]     ─────────┼────────► │  options: CartOptions        │    │
//! │  │  [storage]           │          │  services: CartServices      │    │
//! │  │  [display]           │          │    inventory / catalog       │    │
//! │  └──────────────────────┘          │    storage / notifier        │    │
//! │                                    └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartManager, CartOptions, CartServices};
pub use config::{ApiSettings, CartSettings, DisplaySettings, StorageSettings, StorefrontConfig};
