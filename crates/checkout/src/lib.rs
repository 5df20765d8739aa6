//! Order submission for the cafe ordering platform.
//!
//! The [`CheckoutCoordinator`] turns a session cart plus customer-supplied
//! fields into a persisted order: validate, persist, notify the owner, and
//! clear the cart. Notification delivery is a fire-and-forget concern —
//! failures are logged and counted, never surfaced to the customer.

pub mod coordinator;
pub mod error;
pub mod message;
pub mod services;
pub mod session;

pub use coordinator::CheckoutCoordinator;
pub use error::{CheckoutError, Result};
pub use message::format_owner_message;
pub use services::{InMemoryNotificationService, NotificationService, UltramsgService};
pub use session::CartSessions;
