//! UltraMsg WhatsApp gateway client.

use async_trait::async_trait;
use serde_json::json;

use crate::error::CheckoutError;
use crate::services::notification::NotificationService;

const DEFAULT_BASE_URL: &str = "https://api.ultramsg.com";

/// Notification service backed by the UltraMsg HTTP API.
///
/// Messages are POSTed to `{base_url}/{instance_id}/messages/chat` with a
/// JSON body of `{to, body}` and the API token as a query parameter.
#[derive(Debug, Clone)]
pub struct UltramsgService {
    client: reqwest::Client,
    base_url: String,
    instance_id: String,
    token: String,
}

impl UltramsgService {
    /// Creates a new client for the given UltraMsg instance.
    pub fn new(instance_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            instance_id: instance_id.into(),
            token: token.into(),
        }
    }

    /// Overrides the API base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NotificationService for UltramsgService {
    async fn send_owner_message(&self, to: &str, body: &str) -> Result<(), CheckoutError> {
        let url = format!("{}/{}/messages/chat", self.base_url, self.instance_id);

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.token.as_str())])
            .json(&json!({ "to": to, "body": body }))
            .send()
            .await
            .map_err(|e| CheckoutError::Notification(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CheckoutError::Notification(format!(
                "gateway returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_chat_endpoint_from_instance() {
        let service = UltramsgService::new("instance42", "secret")
            .with_base_url("http://localhost:9999");
        assert_eq!(service.base_url, "http://localhost:9999");
        assert_eq!(service.instance_id, "instance42");
    }
}
