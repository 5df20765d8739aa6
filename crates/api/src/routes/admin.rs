//! Admin session and dashboard endpoints.

use std::sync::Arc;

use admin::{DashboardStats, OrderDashboard, OrderFilter, StatusFilter};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use domain::Order;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::{AppState, require_admin};

// -- Request/response types --

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderFilterQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub orders: Vec<Order>,
    pub stats: DashboardStats,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

fn parse_filter(query: OrderFilterQuery) -> Result<OrderFilter, ApiError> {
    let status = match query.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => StatusFilter::parse(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown status filter: {raw}")))?,
    };
    Ok(OrderFilter {
        status,
        search: query.search,
        from: query.from,
        to: query.to,
    })
}

async fn dashboard(state: &AppState) -> Result<OrderDashboard<Arc<dyn store::OrderStore>>, ApiError> {
    let mut dashboard = OrderDashboard::new(state.order_store.clone());
    dashboard.refresh().await.map_err(ApiError::from)?;
    Ok(dashboard)
}

// -- Handlers --

/// POST /admin/login — exchange credentials for a session token.
#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.sessions.login(&req.username, &req.password)?;
    Ok(Json(LoginResponse {
        token: token.to_string(),
    }))
}

/// POST /admin/logout — end the current session.
#[tracing::instrument(skip(state, headers))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = require_admin(&state.sessions, &headers)?;
    state.sessions.logout(token);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/orders — filtered order list plus aggregate stats.
#[tracing::instrument(skip(state, headers))]
pub async fn orders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<OrderFilterQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let filter = parse_filter(query)?;
    let dashboard = dashboard(&state).await?;
    let orders: Vec<Order> = dashboard.filtered(&filter).into_iter().cloned().collect();
    let stats = dashboard.stats(&filter);
    Ok(Json(DashboardResponse { orders, stats }))
}

/// GET /admin/orders/export — the filtered order list as CSV.
#[tracing::instrument(skip(state, headers))]
pub async fn export_orders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<OrderFilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let filter = parse_filter(query)?;
    let dashboard = dashboard(&state).await?;
    let orders: Vec<Order> = dashboard.filtered(&filter).into_iter().cloned().collect();
    let csv = admin::to_csv(&admin::orders_to_rows(&orders));
    Ok(csv_response("orders.csv", csv))
}

/// GET /admin/inventory/export — the full catalog as CSV.
#[tracing::instrument(skip(state, headers))]
pub async fn export_inventory(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let items = state.inventory_store.list_items().await?;
    let csv = admin::to_csv(&admin::inventory_to_rows(&items));
    Ok(csv_response("inventory.csv", csv))
}

/// POST /admin/inventory/import — bulk-add catalog items from CSV.
///
/// The whole file is validated before anything is stored, so a bad row
/// imports nothing.
#[tracing::instrument(skip(state, headers, body))]
pub async fn import_inventory(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ImportResponse>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let rows = admin::parse_csv(&body)?;
    let drafts = admin::parse_inventory_rows(&rows)?;

    let mut panel = admin::InventoryPanel::new(state.inventory_store.clone());
    let mut imported = 0;
    for draft in drafts {
        panel.add_item(draft).await?;
        imported += 1;
    }
    metrics::counter!("admin_inventory_imports").increment(1);
    Ok(Json(ImportResponse { imported }))
}

fn csv_response(filename: &str, csv: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
}
