//! Admin-facing views over the order and inventory stores.
//!
//! Each view holds a snapshot refreshed from its backing store, plus the
//! filtering, statistics, and mutation operations the dashboard needs.

pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod inventory;
pub mod session;

pub use dashboard::{Confirmation, OrderDashboard};
pub use error::{AdminError, Result};
pub use export::{
    inventory_to_rows, orders_to_rows, parse_csv, parse_inventory_rows, to_csv, INVENTORY_COLUMNS,
    ORDER_COLUMNS,
};
pub use filter::{CategoryFilter, DashboardStats, InventoryFilter, OrderFilter, StatusFilter};
pub use inventory::InventoryPanel;
pub use session::{AdminCredentials, SessionManager, SessionToken};
