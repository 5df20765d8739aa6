//! Owner notification boundary.

pub mod notification;
pub mod ultramsg;

pub use notification::{InMemoryNotificationService, NotificationService};
pub use ultramsg::UltramsgService;
