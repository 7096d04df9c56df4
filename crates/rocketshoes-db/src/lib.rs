//! # rocketshoes-db: Persistence Layer
//!
//! SQLite storage for the storefront's key-value slots.
//!
//! ## Module Organization
//! ```text
//! rocketshoes_db/
//! ├── lib.rs          ◄─── Re-exports
//! ├── error.rs        ◄─── DbError and its mapping to StorageError
//! ├── pool.rs         ◄─── DbConfig, Database (pool + migrations)
//! ├── migrations.rs   ◄─── Embedded migrations
//! └── repository/
//!     └── slot.rs     ◄─── SlotRepository (implements SlotStorage)
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let db = Database::new(DbConfig::new("./storefront.db")).await?;
//! let slots = db.slots();
//!
//! slots.put("@RocketShoes:cart", "[]").await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
