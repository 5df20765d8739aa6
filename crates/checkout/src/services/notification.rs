//! Notification service trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::CheckoutError;

/// Trait for delivering owner notifications.
///
/// Fire-and-forget from the caller's perspective: the checkout
/// coordinator captures and logs failures instead of propagating them.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Sends a text message to the given destination.
    async fn send_owner_message(&self, to: &str, body: &str) -> Result<(), CheckoutError>;
}

#[async_trait]
impl<T: NotificationService + ?Sized> NotificationService for Arc<T> {
    async fn send_owner_message(&self, to: &str, body: &str) -> Result<(), CheckoutError> {
        (**self).send_owner_message(to, body).await
    }
}

#[derive(Debug, Default)]
struct InMemoryNotificationState {
    sent: Vec<(String, String)>,
    fail_on_send: bool,
}

/// In-memory notification service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationService {
    state: Arc<RwLock<InMemoryNotificationState>>,
}

impl InMemoryNotificationService {
    /// Creates a new in-memory notification service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on subsequent sends.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of messages delivered.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().sent.len()
    }

    /// Returns the last delivered (destination, body) pair.
    pub fn last_message(&self) -> Option<(String, String)> {
        self.state.read().unwrap().sent.last().cloned()
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationService {
    async fn send_owner_message(&self, to: &str, body: &str) -> Result<(), CheckoutError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(CheckoutError::Notification(
                "gateway unavailable".to_string(),
            ));
        }

        state.sent.push((to.to_string(), body.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_messages() {
        let service = InMemoryNotificationService::new();
        service
            .send_owner_message("9800000000", "hello")
            .await
            .unwrap();

        assert_eq!(service.sent_count(), 1);
        assert_eq!(
            service.last_message(),
            Some(("9800000000".to_string(), "hello".to_string()))
        );
    }

    #[tokio::test]
    async fn fail_flag_makes_sends_error() {
        let service = InMemoryNotificationService::new();
        service.set_fail_on_send(true);

        let result = service.send_owner_message("9800000000", "hello").await;
        assert!(result.is_err());
        assert_eq!(service.sent_count(), 0);
    }
}
