//! Domain error types.

use thiserror::Error;

/// Errors that can occur while validating customer or admin input.
///
/// Every variant carries a user-facing message; none of these leave
/// partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Order submission attempted with an empty cart.
    #[error("Your cart is empty! Please add items before placing an order.")]
    EmptyCart,

    /// Phone number does not match the local mobile numbering plan.
    #[error("Invalid phone number '{phone}': expected a 10-digit mobile number starting with 96/97/98")]
    InvalidPhone { phone: String },

    /// Home delivery requires a non-blank address.
    #[error("Please enter your delivery address.")]
    AddressRequired,

    /// A required inventory field was left blank.
    #[error("Field '{field}' must not be blank")]
    BlankField { field: &'static str },

    /// A numeric field could not be parsed.
    #[error("Field '{field}' is not a valid number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// An enumerated value was outside its allowed set.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
