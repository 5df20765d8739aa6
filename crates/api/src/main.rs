//! API server entry point.

use std::sync::Arc;

use checkout::{InMemoryNotificationService, NotificationService, UltramsgService};
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() {
    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let prometheus_builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let metrics_handle = prometheus_builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 3. Load configuration and pick the notification transport
    let config = api::config::Config::from_env();
    let notifier: Arc<dyn NotificationService> =
        match (&config.ultramsg_instance, &config.ultramsg_token) {
            (Some(instance), Some(token)) => {
                tracing::info!("using UltraMsg WhatsApp notifications");
                Arc::new(UltramsgService::new(instance.clone(), token.clone()))
            }
            _ => {
                tracing::warn!("UltraMsg credentials missing, notifications stay in-process");
                Arc::new(InMemoryNotificationService::new())
            }
        };

    // 4. Create stores and application state
    let order_store = Arc::new(store::memory::InMemoryOrderStore::new());
    let inventory_store = Arc::new(store::memory::InMemoryInventoryStore::new());
    let state = api::create_state(&config, order_store, inventory_store, notifier);

    // 5. Build the application
    let app = api::create_app(state, metrics_handle);

    // 6. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
