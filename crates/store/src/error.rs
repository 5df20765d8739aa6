//! Store error types.

use thiserror::Error;

/// Errors that can occur while talking to a persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record addressed by id does not exist.
    ///
    /// Reported distinctly from generic failures so update/delete callers
    /// can surface it as a not-found rather than a server error.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored payload could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Builds a not-found error for an order id.
    pub fn order_not_found(id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity: "Order",
            id: id.to_string(),
        }
    }

    /// Builds a not-found error for an inventory item id.
    pub fn item_not_found(id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity: "Inventory item",
            id: id.to_string(),
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;
