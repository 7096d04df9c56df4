//! # Commands Module
//!
//! Handlers behind the `rocketshoes` subcommands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── show, add, remove, update
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ rocketshoes add 3                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  clap parses Command::Add { product_id: 3 }                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::add_to_cart(&mut manager, 3)                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CartResponse ──► JSON on stdout, drained notices on stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;

pub use cart::{add_to_cart, remove_from_cart, show_cart, update_cart_item, CartResponse};
