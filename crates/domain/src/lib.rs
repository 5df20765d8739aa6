//! Domain layer for the cafe ordering platform.
//!
//! This crate provides the core model:
//! - Cart aggregator with (name, size) line identity
//! - Order record with lifecycle status and submission validation
//! - Phone number validation for the local mobile numbering plan
//! - Inventory item model with field validation

pub mod cart;
pub mod error;
pub mod item;
pub mod order;
pub mod phone;

pub use cart::{Cart, CartLine, Size};
pub use error::DomainError;
pub use item::{InventoryItem, NewInventoryItem};
pub use order::{CheckoutForm, DeliveryMethod, Order, OrderLine, OrderStatus, PaymentMethod};
pub use phone::Phone;
