//! Checkout error types.

use domain::DomainError;
use store::StoreError;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Customer input failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The order store rejected the write.
    #[error("Failed to place order: {0}")]
    Store(#[from] StoreError),

    /// The notification gateway failed.
    ///
    /// Never returned from order placement — only from direct sends.
    #[error("Notification error: {0}")]
    Notification(String),

    /// The referenced cart session does not exist.
    #[error("Unknown cart session: {0}")]
    UnknownCart(common::CartId),
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
