//! # Repositories
//!
//! One repository per table. Repositories are cheap to create (they clone
//! the pool handle) and are obtained through [`crate::Database`].

pub mod slot;
