//! Menu and inventory management endpoints.

use std::sync::Arc;

use admin::{CategoryFilter, Confirmation, InventoryFilter, InventoryPanel};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use common::ItemId;
use domain::{InventoryItem, NewInventoryItem};
use serde::Deserialize;

use crate::error::ApiError;
use crate::routes::orders::{ConfirmQuery, DeleteResponse};
use crate::routes::{AppState, require_admin};

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

fn parse_item_id(id: &str) -> Result<ItemId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid item ID: {e}")))?;
    Ok(ItemId::from_uuid(uuid))
}

async fn panel(state: &AppState) -> Result<InventoryPanel<Arc<dyn store::InventoryStore>>, ApiError> {
    let mut panel = InventoryPanel::new(state.inventory_store.clone());
    panel.refresh().await.map_err(ApiError::from)?;
    Ok(panel)
}

/// GET /inventory — the menu, with optional name search and category filter.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let filter = InventoryFilter {
        search: query.search,
        category: query
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default(),
    };
    let panel = panel(&state).await?;
    let items: Vec<InventoryItem> = panel.filtered(&filter).into_iter().cloned().collect();
    Ok(Json(items))
}

/// GET /inventory/categories — distinct categories in menu order.
#[tracing::instrument(skip(state))]
pub async fn categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let panel = panel(&state).await?;
    Ok(Json(panel.categories()))
}

/// POST /inventory — add a menu item (admin only).
#[tracing::instrument(skip(state, headers, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    require_admin(&state.sessions, &headers)?;
    let mut panel = InventoryPanel::new(state.inventory_store.clone());
    let item = panel.add_item(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /inventory/:id — replace every field of a menu item (admin only).
#[tracing::instrument(skip(state, headers, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<NewInventoryItem>,
) -> Result<Json<InventoryItem>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let item_id = parse_item_id(&id)?;
    let mut panel = InventoryPanel::new(state.inventory_store.clone());
    let item = panel.update_item(item_id, req).await?;
    Ok(Json(item))
}

/// DELETE /inventory/:id?confirm=true — remove a menu item (admin only).
#[tracing::instrument(skip(state, headers))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require_admin(&state.sessions, &headers)?;
    let item_id = parse_item_id(&id)?;
    let mut panel = InventoryPanel::new(state.inventory_store.clone());
    let deleted = panel
        .delete_item(item_id, Confirmation::from_bool(query.confirm))
        .await?;
    Ok(Json(DeleteResponse { deleted }))
}
