//! Persistence collaborators for orders and inventory.
//!
//! Exposes the [`OrderStore`] and [`InventoryStore`] traits consumed by the
//! checkout and admin components, an in-memory implementation used by tests
//! and the default runtime, and a PostgreSQL implementation backed by sqlx.

pub mod error;
pub mod inventory;
pub mod memory;
pub mod orders;
pub mod postgres;

pub use error::{Result, StoreError};
pub use inventory::InventoryStore;
pub use memory::{InMemoryInventoryStore, InMemoryOrderStore};
pub use orders::OrderStore;
pub use postgres::{PostgresInventoryStore, PostgresOrderStore};
