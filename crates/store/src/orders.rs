//! Order persistence boundary.

use std::sync::Arc;

use async_trait::async_trait;
use common::OrderId;
use domain::{Order, OrderStatus, Phone};

use crate::error::Result;

/// Collaborator owning the collection of placed orders.
///
/// Orders are persisted whole; the only mutations after creation are
/// status transitions and full deletion. Last writer wins — there is no
/// optimistic concurrency control at this boundary.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a newly placed order and returns it.
    async fn create_order(&self, order: Order) -> Result<Order>;

    /// Lists all orders in placement order.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Lists orders placed with the given phone number.
    async fn get_orders_by_phone(&self, phone: &Phone) -> Result<Vec<Order>>;

    /// Sets the status of the order with the given id.
    ///
    /// Returns the updated order, or a not-found error.
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order>;

    /// Permanently deletes the order with the given id.
    ///
    /// Deleting a missing id is a not-found error, making a second delete
    /// of the same id observable rather than silent.
    async fn delete_order(&self, id: OrderId) -> Result<()>;
}

#[async_trait]
impl<T: OrderStore + ?Sized> OrderStore for Arc<T> {
    async fn create_order(&self, order: Order) -> Result<Order> {
        (**self).create_order(order).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        (**self).list_orders().await
    }

    async fn get_orders_by_phone(&self, phone: &Phone) -> Result<Vec<Order>> {
        (**self).get_orders_by_phone(phone).await
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        (**self).update_status(id, status).await
    }

    async fn delete_order(&self, id: OrderId) -> Result<()> {
        (**self).delete_order(id).await
    }
}
