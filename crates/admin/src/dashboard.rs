use common::OrderId;
use domain::{Order, OrderStatus};
use store::OrderStore;

use crate::error::Result;
use crate::filter::{DashboardStats, OrderFilter};

/// Outcome of a destructive-action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn from_bool(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Cancelled
        }
    }
}

/// Order management view: a refreshable snapshot of all orders, with
/// filtering, aggregate stats, and the lifecycle mutations exposed to admins.
#[derive(Debug)]
pub struct OrderDashboard<S> {
    store: S,
    orders: Vec<Order>,
}

impl<S: OrderStore> OrderDashboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            orders: Vec::new(),
        }
    }

    /// Reloads the snapshot from the backing store.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<()> {
        self.orders = self.store.list_orders().await?;
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders from the current snapshot passing the filter, newest first.
    pub fn filtered(&self, filter: &OrderFilter) -> Vec<&Order> {
        let mut matched: Vec<&Order> = self.orders.iter().filter(|o| filter.matches(o)).collect();
        matched.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        matched
    }

    /// Stats over the filtered set, so the header always agrees with the list.
    pub fn stats(&self, filter: &OrderFilter) -> DashboardStats {
        DashboardStats::compute(self.orders.iter().filter(|o| filter.matches(o)))
    }

    /// Sets an order's status. Any transition is allowed, including back to
    /// pending, so a mis-click is recoverable.
    #[tracing::instrument(skip(self))]
    pub async fn set_status(&mut self, id: OrderId, status: OrderStatus) -> Result<Order> {
        let updated = self.store.update_status(id, status).await?;
        if let Some(local) = self.orders.iter_mut().find(|o| o.id == id) {
            *local = updated.clone();
        }
        metrics::counter!("admin_status_updates").increment(1);
        tracing::info!(order_id = %id, status = %status, "order status updated");
        Ok(updated)
    }

    /// Deletes an order once the admin confirms. Returns `false` when the
    /// prompt was cancelled, leaving the order untouched.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&mut self, id: OrderId, confirmation: Confirmation) -> Result<bool> {
        if confirmation == Confirmation::Cancelled {
            return Ok(false);
        }
        self.store.delete_order(id).await?;
        self.orders.retain(|o| o.id != id);
        metrics::counter!("admin_orders_deleted").increment(1);
        tracing::info!(order_id = %id, "order deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::Money;
    use domain::{DeliveryMethod, PaymentMethod, Phone};
    use store::memory::InMemoryOrderStore;

    fn order(name: &str, status: OrderStatus, day: u32) -> Order {
        Order {
            id: OrderId::new(),
            name: name.to_string(),
            phone: Phone::parse("9812345678").unwrap(),
            delivery_method: DeliveryMethod::DineIn,
            address: None,
            payment: PaymentMethod::Cash,
            total: Money::from_paisa(20_000),
            items: vec![],
            status,
            placed_at: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap(),
        }
    }

    async fn dashboard_with(
        orders: Vec<Order>,
    ) -> (OrderDashboard<InMemoryOrderStore>, InMemoryOrderStore) {
        let store = InMemoryOrderStore::default();
        for o in orders {
            store.create_order(o).await.unwrap();
        }
        let mut dashboard = OrderDashboard::new(store.clone());
        dashboard.refresh().await.unwrap();
        (dashboard, store)
    }

    #[tokio::test]
    async fn refresh_loads_all_orders() {
        let (dashboard, _) = dashboard_with(vec![
            order("A", OrderStatus::Pending, 1),
            order("B", OrderStatus::Delivered, 2),
        ])
        .await;
        assert_eq!(dashboard.orders().len(), 2);
    }

    #[tokio::test]
    async fn filtered_sorts_newest_first() {
        let (dashboard, _) = dashboard_with(vec![
            order("Old", OrderStatus::Pending, 1),
            order("New", OrderStatus::Pending, 20),
            order("Mid", OrderStatus::Pending, 10),
        ])
        .await;
        let names: Vec<&str> = dashboard
            .filtered(&OrderFilter::default())
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["New", "Mid", "Old"]);
    }

    #[tokio::test]
    async fn set_status_updates_store_and_snapshot() {
        let target = order("A", OrderStatus::Pending, 1);
        let id = target.id;
        let (mut dashboard, store) = dashboard_with(vec![target]).await;

        let updated = dashboard.set_status(id, OrderStatus::Delivered).await.unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        assert_eq!(dashboard.orders()[0].status, OrderStatus::Delivered);

        let persisted = store.list_orders().await.unwrap();
        assert_eq!(persisted[0].status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn status_can_go_back_to_pending() {
        let target = order("A", OrderStatus::Delivered, 1);
        let id = target.id;
        let (mut dashboard, _) = dashboard_with(vec![target]).await;

        let updated = dashboard.set_status(id, OrderStatus::Pending).await.unwrap();
        assert_eq!(updated.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn cancelled_confirmation_leaves_order_in_place() {
        let target = order("A", OrderStatus::Pending, 1);
        let id = target.id;
        let (mut dashboard, store) = dashboard_with(vec![target]).await;

        let deleted = dashboard
            .delete_order(id, Confirmation::Cancelled)
            .await
            .unwrap();
        assert!(!deleted);
        assert_eq!(store.order_count().await, 1);
        assert_eq!(dashboard.orders().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_order() {
        let target = order("A", OrderStatus::Pending, 1);
        let id = target.id;
        let (mut dashboard, store) = dashboard_with(vec![target]).await;

        let deleted = dashboard
            .delete_order(id, Confirmation::Confirmed)
            .await
            .unwrap();
        assert!(deleted);
        assert_eq!(store.order_count().await, 0);
        assert!(dashboard.orders().is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_order_is_not_found() {
        let (mut dashboard, _) = dashboard_with(vec![]).await;
        let err = dashboard
            .delete_order(OrderId::new(), Confirmation::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::AdminError::Store(e) if e.is_not_found()));
    }
}
