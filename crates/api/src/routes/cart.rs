//! Cart session endpoints: line management and checkout.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::{CartId, Money};
use domain::{Cart, CartLine, CheckoutForm, Order, Size};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct AddLineRequest {
    pub name: String,
    pub size: String,
    pub unit_price_paisa: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub image: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Identifies one cart line by its (name, size) key.
#[derive(Deserialize)]
pub struct LineKeyRequest {
    pub name: String,
    pub size: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartCreatedResponse {
    pub cart_id: String,
}

#[derive(Serialize)]
pub struct CartLineResponse {
    pub name: String,
    pub size: String,
    pub unit_price_paisa: i64,
    pub quantity: u32,
    pub subtotal_paisa: i64,
    pub image: Option<String>,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub cart_id: String,
    pub lines: Vec<CartLineResponse>,
    pub total_paisa: i64,
}

fn cart_response(id: CartId, cart: &Cart) -> CartResponse {
    CartResponse {
        cart_id: id.to_string(),
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineResponse {
                name: line.name.clone(),
                size: line.size.to_string(),
                unit_price_paisa: line.unit_price.paisa(),
                quantity: line.quantity,
                subtotal_paisa: line.subtotal().paisa(),
                image: line.image.clone(),
            })
            .collect(),
        total_paisa: cart.total().paisa(),
    }
}

fn parse_cart_id(id: &str) -> Result<CartId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid cart ID: {e}")))?;
    Ok(CartId::from_uuid(uuid))
}

// -- Handlers --

/// POST /carts — start a new cart session.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<CartCreatedResponse>) {
    let cart_id = state.carts.create().await;
    (
        StatusCode::CREATED,
        Json(CartCreatedResponse {
            cart_id: cart_id.to_string(),
        }),
    )
}

/// GET /carts/:id — current cart contents and total.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let cart = state
        .carts
        .snapshot(&cart_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/items — add a selection, merging on (name, size).
#[tracing::instrument(skip(state, req))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AddLineRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let mut line = CartLine::new(
        req.name,
        req.size,
        Money::from_paisa(req.unit_price_paisa),
        req.quantity,
    );
    if let Some(image) = req.image {
        line = line.with_image(image);
    }
    let cart = state
        .carts
        .update(&cart_id, move |cart| {
            cart.add(line);
            cart.clone()
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/items/increase — bump a line's quantity by one.
#[tracing::instrument(skip(state, req))]
pub async fn increase_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<LineKeyRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let size = Size::from(req.size);
    let cart = state
        .carts
        .update(&cart_id, move |cart| {
            cart.increase_quantity(&req.name, &size);
            cart.clone()
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/items/decrease — drop a line's quantity by one, removing
/// the line when it reaches zero.
#[tracing::instrument(skip(state, req))]
pub async fn decrease_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<LineKeyRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let size = Size::from(req.size);
    let cart = state
        .carts
        .update(&cart_id, move |cart| {
            cart.decrease_quantity(&req.name, &size);
            cart.clone()
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/items/remove — remove a line entirely.
#[tracing::instrument(skip(state, req))]
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<LineKeyRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let size = Size::from(req.size);
    let cart = state
        .carts
        .update(&cart_id, move |cart| {
            cart.remove(&req.name, &size);
            cart.clone()
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/clear — empty the cart.
#[tracing::instrument(skip(state))]
pub async fn clear(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let cart = state
        .carts
        .update(&cart_id, |cart| {
            cart.clear();
            cart.clone()
        })
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;
    Ok(Json(cart_response(cart_id, &cart)))
}

/// POST /carts/:id/checkout — place an order from the cart.
///
/// On success the session cart is emptied; on any validation failure it is
/// left untouched so the customer can correct the form and retry.
#[tracing::instrument(skip(state, form))]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let cart_id = parse_cart_id(&id)?;
    let mut cart = state
        .carts
        .snapshot(&cart_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Cart {id} not found")))?;

    let order = state.coordinator.place_order(form, &mut cart).await?;

    // Persist the now-empty cart back into the session.
    state.carts.replace(&cart_id, cart).await;

    Ok((StatusCode::CREATED, Json(order)))
}
