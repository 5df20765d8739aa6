//! Shared types for the cafe ordering platform.
//!
//! Identifier newtypes ([`OrderId`], [`ItemId`], [`CartId`]) and the
//! [`Money`] value type used across all crates.

mod types;

pub use types::{CartId, ItemId, Money, OrderId};
