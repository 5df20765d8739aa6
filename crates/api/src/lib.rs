//! HTTP API server with observability for the cafe ordering platform.
//!
//! Provides REST endpoints for cart sessions, checkout, order lookup, and
//! the admin dashboard, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use admin::{AdminCredentials, SessionManager};
use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use checkout::{
    CartSessions, CheckoutCoordinator, InMemoryNotificationService, NotificationService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use store::memory::{InMemoryInventoryStore, InMemoryOrderStore};
use store::{InventoryStore, OrderStore};

use crate::config::Config;
use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        // Cart sessions
        .route("/carts", post(routes::cart::create))
        .route("/carts/{id}", get(routes::cart::get))
        .route("/carts/{id}/items", post(routes::cart::add_item))
        .route("/carts/{id}/items/increase", post(routes::cart::increase_item))
        .route("/carts/{id}/items/decrease", post(routes::cart::decrease_item))
        .route("/carts/{id}/items/remove", post(routes::cart::remove_item))
        .route("/carts/{id}/clear", post(routes::cart::clear))
        .route("/carts/{id}/checkout", post(routes::cart::checkout))
        // Orders
        .route("/orders/phone/{phone}", get(routes::orders::by_phone))
        .route("/orders/{id}/status", patch(routes::orders::update_status))
        .route("/orders/{id}", delete(routes::orders::delete))
        // Menu and inventory
        .route("/inventory", get(routes::inventory::list))
        .route("/inventory", post(routes::inventory::create))
        .route("/inventory/categories", get(routes::inventory::categories))
        .route("/inventory/{id}", put(routes::inventory::update))
        .route("/inventory/{id}", delete(routes::inventory::delete))
        // Admin dashboard
        .route("/admin/login", post(routes::admin::login))
        .route("/admin/logout", post(routes::admin::logout))
        .route("/admin/orders", get(routes::admin::orders))
        .route("/admin/orders/export", get(routes::admin::export_orders))
        .route("/admin/inventory/export", get(routes::admin::export_inventory))
        .route("/admin/inventory/import", post(routes::admin::import_inventory))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Builds application state around the given stores and notifier.
pub fn create_state(
    config: &Config,
    order_store: Arc<dyn OrderStore>,
    inventory_store: Arc<dyn InventoryStore>,
    notifier: Arc<dyn NotificationService>,
) -> Arc<AppState> {
    let coordinator = CheckoutCoordinator::new(
        order_store.clone(),
        notifier,
        config.owner_phone.clone(),
    );
    Arc::new(AppState {
        order_store,
        inventory_store,
        coordinator,
        carts: CartSessions::new(),
        sessions: SessionManager::new(AdminCredentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )),
    })
}

/// Creates default in-memory application state, returning the notification
/// recorder alongside so callers can observe sends.
pub fn create_default_state(config: &Config) -> (Arc<AppState>, InMemoryNotificationService) {
    let notifier = InMemoryNotificationService::new();
    let state = create_state(
        config,
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(InMemoryInventoryStore::new()),
        Arc::new(notifier.clone()),
    );
    (state, notifier)
}
