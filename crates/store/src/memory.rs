use std::sync::Arc;

use async_trait::async_trait;
use common::{ItemId, OrderId};
use domain::{InventoryItem, NewInventoryItem, Order, OrderStatus, Phone};
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::inventory::InventoryStore;
use crate::orders::OrderStore;

/// In-memory order store.
///
/// Backs tests and the default runtime, and provides the same interface
/// as the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Clears all orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create_order(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;
        orders.push(order.clone());
        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn get_orders_by_phone(&self, phone: &Phone) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.phone == *phone)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::order_not_found(id))?;
        order.status = status;
        Ok(order.clone())
    }

    async fn delete_order(&self, id: OrderId) -> Result<()> {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|o| o.id != id);
        if orders.len() == before {
            return Err(StoreError::order_not_found(id));
        }
        Ok(())
    }
}

/// In-memory inventory store.
#[derive(Clone, Default)]
pub struct InMemoryInventoryStore {
    items: Arc<RwLock<Vec<InventoryItem>>>,
}

impl InMemoryInventoryStore {
    /// Creates a new empty in-memory inventory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored items.
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Clears all items.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn create_item(&self, item: InventoryItem) -> Result<InventoryItem> {
        let mut items = self.items.write().await;
        items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, fields: NewInventoryItem) -> Result<InventoryItem> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::item_not_found(id))?;

        *item = InventoryItem {
            id,
            name: fields.name,
            category: fields.category,
            price_half: fields.price_half,
            price_full: fields.price_full,
            stock: fields.stock,
            image: fields.image,
        };
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(StoreError::item_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::Money;
    use domain::{Cart, CartLine, CheckoutForm, DeliveryMethod, PaymentMethod, Size};

    fn sample_order(phone: &str) -> Order {
        let mut cart = Cart::new();
        cart.add(CartLine::new("Latte", Size::Full, Money::from_rupees(200), 1));
        Order::place(
            CheckoutForm {
                name: "Bina".to_string(),
                phone: phone.to_string(),
                delivery_method: DeliveryMethod::DineIn,
                address: String::new(),
                payment: PaymentMethod::Cash,
            },
            &cart,
            Utc::now(),
        )
        .unwrap()
    }

    fn sample_item(name: &str) -> InventoryItem {
        NewInventoryItem {
            name: name.to_string(),
            category: "Coffee".to_string(),
            price_half: Money::from_rupees(100),
            price_full: Money::from_rupees(180),
            stock: 5,
            image: "https://example.com/img.jpg".to_string(),
        }
        .into_item()
        .unwrap()
    }

    #[tokio::test]
    async fn create_and_list_orders() {
        let store = InMemoryOrderStore::new();
        store.create_order(sample_order("9812345678")).await.unwrap();
        store.create_order(sample_order("9712345678")).await.unwrap();

        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(store.order_count().await, 2);
    }

    #[tokio::test]
    async fn get_orders_by_phone_filters_exactly() {
        let store = InMemoryOrderStore::new();
        store.create_order(sample_order("9812345678")).await.unwrap();
        store.create_order(sample_order("9712345678")).await.unwrap();
        store.create_order(sample_order("9812345678")).await.unwrap();

        let phone = Phone::parse("9812345678").unwrap();
        let orders = store.get_orders_by_phone(&phone).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.phone == phone));
    }

    #[tokio::test]
    async fn update_status_persists() {
        let store = InMemoryOrderStore::new();
        let order = store.create_order(sample_order("9812345678")).await.unwrap();

        let updated = store
            .update_status(order.id, OrderStatus::Delivered)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);

        let listed = store.list_orders().await.unwrap();
        assert_eq!(listed[0].status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn update_status_of_missing_order_is_not_found() {
        let store = InMemoryOrderStore::new();
        let result = store
            .update_status(OrderId::new(), OrderStatus::Cancelled)
            .await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_order_removes_exactly_one() {
        let store = InMemoryOrderStore::new();
        let first = store.create_order(sample_order("9812345678")).await.unwrap();
        store.create_order(sample_order("9712345678")).await.unwrap();

        store.delete_order(first.id).await.unwrap();
        assert_eq!(store.order_count().await, 1);

        // Second delete of the same id reports not-found.
        let again = store.delete_order(first.id).await;
        assert!(matches!(again, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn inventory_crud_roundtrip() {
        let store = InMemoryInventoryStore::new();
        let item = store.create_item(sample_item("Cold Brew")).await.unwrap();
        store.create_item(sample_item("Espresso")).await.unwrap();

        let mut fields: NewInventoryItem = item.clone().into();
        fields.stock = 42;
        let updated = store.update_item(item.id, fields).await.unwrap();
        assert_eq!(updated.stock, 42);
        assert_eq!(updated.id, item.id);

        store.delete_item(item.id).await.unwrap();
        let remaining = store.list_items().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Espresso");
    }

    #[tokio::test]
    async fn delete_missing_item_is_not_found() {
        let store = InMemoryInventoryStore::new();
        let result = store.delete_item(ItemId::new()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
