//! HTTP route handlers.

pub mod admin;
pub mod cart;
pub mod health;
pub mod inventory;
pub mod metrics;
pub mod orders;

use std::sync::Arc;

use ::admin::{SessionManager, SessionToken};
use axum::http::HeaderMap;
use checkout::{CartSessions, CheckoutCoordinator, NotificationService};
use store::{InventoryStore, OrderStore};

use crate::error::ApiError;

/// Header carrying the admin session token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub order_store: Arc<dyn OrderStore>,
    pub inventory_store: Arc<dyn InventoryStore>,
    pub coordinator: CheckoutCoordinator<Arc<dyn OrderStore>, Arc<dyn NotificationService>>,
    pub carts: CartSessions,
    pub sessions: SessionManager,
}

/// Extracts and checks the admin session token from the request headers.
pub(crate) fn require_admin(
    sessions: &SessionManager,
    headers: &HeaderMap,
) -> Result<SessionToken, ApiError> {
    let token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(SessionToken::parse);
    Ok(sessions.require(token)?)
}
