//! Order record, lifecycle status, and submission validation.

use chrono::{DateTime, Utc};
use common::{Money, OrderId};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine, Size};
use crate::error::DomainError;
use crate::phone::Phone;

/// Lifecycle status of a placed order.
///
/// Orders start `pending`. The admin may move an order to any status —
/// there is no enforced forward-only policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Newly placed, awaiting fulfilment.
    #[default]
    Pending,

    /// Fulfilled and handed over; counts toward revenue.
    Delivered,

    /// Cancelled; excluded from revenue.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in display order.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Returns the status name as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a wire string back into a status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(DomainError::UnknownVariant {
                kind: "order status",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    /// Delivered to a customer-supplied address (address required).
    #[serde(rename = "Home Delivery")]
    HomeDelivery,

    /// Picked up and consumed at the cafe (no address).
    #[serde(rename = "Dine In")]
    DineIn,
}

impl DeliveryMethod {
    /// Returns the delivery method as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::HomeDelivery => "Home Delivery",
            DeliveryMethod::DineIn => "Dine In",
        }
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment instrument chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "eSewa")]
    Esewa,
    Khalti,
    #[serde(rename = "Bank QR")]
    BankQr,
}

impl PaymentMethod {
    /// Returns the payment method as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Esewa => "eSewa",
            PaymentMethod::Khalti => "Khalti",
            PaymentMethod::BankQr => "Bank QR",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of a placed order, copied by value from the cart.
///
/// Editing inventory later never retroactively changes these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub size: Size,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

/// Customer-supplied fields collected at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub address: String,
    pub payment: PaymentMethod,
}

/// A finalized, persisted purchase request.
///
/// Created on submission with status `pending`; afterwards mutated only
/// via status transitions or full deletion, never edited otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub phone: Phone,
    pub delivery_method: DeliveryMethod,
    /// Present exactly when `delivery_method` is home delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub payment: PaymentMethod,
    pub total: Money,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    /// Creation time, immutable once set.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Validates the checkout form against the cart and builds an order.
    ///
    /// Checks run in a fixed sequence and short-circuit on the first
    /// failure: non-empty cart, then phone format, then (for home
    /// delivery) a non-blank address. No state is touched on failure.
    pub fn place(
        form: CheckoutForm,
        cart: &Cart,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        let phone = Phone::parse(&form.phone)?;

        let address = match form.delivery_method {
            DeliveryMethod::HomeDelivery => {
                let trimmed = form.address.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::AddressRequired);
                }
                Some(trimmed.to_string())
            }
            DeliveryMethod::DineIn => None,
        };

        Ok(Self {
            id: OrderId::new(),
            name: form.name,
            phone,
            delivery_method: form.delivery_method,
            address,
            payment: form.payment,
            total: cart.total(),
            items: cart.lines().iter().map(OrderLine::from).collect(),
            status: OrderStatus::Pending,
            placed_at,
        })
    }
}
