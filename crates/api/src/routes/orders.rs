//! Order lookup and lifecycle endpoints.

use std::sync::Arc;

use admin::{Confirmation, OrderDashboard};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use common::OrderId;
use domain::{Order, OrderStatus, Phone};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::{AppState, require_admin};

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid order ID: {e}")))?;
    Ok(OrderId::from_uuid(uuid))
}

/// GET /orders/phone/:phone — order history for one customer.
#[tracing::instrument(skip(state))]
pub async fn by_phone(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let phone = Phone::parse(&phone)?;
    let orders = state.order_store.get_orders_by_phone(&phone).await?;
    Ok(Json(orders))
}

/// PATCH /orders/:id/status — set an order's status (admin only).
#[tracing::instrument(skip(state, headers, req))]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let order_id = parse_order_id(&id)?;
    let status = OrderStatus::parse(&req.status)?;

    let mut dashboard = OrderDashboard::new(state.order_store.clone());
    let updated = dashboard.set_status(order_id, status).await?;
    Ok(Json(updated))
}

/// DELETE /orders/:id?confirm=true — delete an order (admin only).
///
/// Without `confirm=true` the request is treated as a cancelled prompt and
/// nothing is deleted.
#[tracing::instrument(skip(state, headers))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let order_id = parse_order_id(&id)?;

    let mut dashboard = OrderDashboard::new(state.order_store.clone());
    let deleted = dashboard
        .delete_order(order_id, Confirmation::from_bool(query.confirm))
        .await?;
    Ok(Json(DeleteResponse { deleted }))
}
