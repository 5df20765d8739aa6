//! PostgreSQL-backed stores.
//!
//! Orders and inventory items are persisted as JSONB payloads alongside a
//! few indexed columns (id, phone, status, placed_at) used for lookups.

use async_trait::async_trait;
use common::{ItemId, OrderId};
use domain::{InventoryItem, NewInventoryItem, Order, OrderStatus, Phone};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::error::{Result, StoreError};
use crate::inventory::InventoryStore;
use crate::orders::OrderStore;

/// PostgreSQL order store.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let payload: serde_json::Value = row.try_get("payload")?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id))]
    async fn create_order(&self, order: Order) -> Result<Order> {
        let payload = serde_json::to_value(&order)?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, phone, status, placed_at, payload)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.phone.as_str())
        .bind(order.status.as_str())
        .bind(order.placed_at)
        .bind(payload)
        .execute(&self.pool)
        .await?;

        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT payload FROM orders ORDER BY placed_at ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn get_orders_by_phone(&self, phone: &Phone) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT payload FROM orders WHERE phone = $1 ORDER BY placed_at ASC")
            .bind(phone.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        let row = sqlx::query("SELECT payload FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::order_not_found(id))?;

        let mut order = Self::row_to_order(row)?;
        order.status = status;
        let payload = serde_json::to_value(&order)?;

        sqlx::query("UPDATE orders SET status = $2, payload = $3 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .bind(payload)
            .execute(&self.pool)
            .await?;

        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_order(&self, id: OrderId) -> Result<()> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::order_not_found(id));
        }
        Ok(())
    }
}

/// PostgreSQL inventory store.
#[derive(Clone)]
pub struct PostgresInventoryStore {
    pool: PgPool,
}

impl PostgresInventoryStore {
    /// Creates a new PostgreSQL inventory store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_item(row: PgRow) -> Result<InventoryItem> {
        let payload: serde_json::Value = row.try_get("payload")?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl InventoryStore for PostgresInventoryStore {
    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        let rows = sqlx::query("SELECT payload FROM inventory_items ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_item).collect()
    }

    #[tracing::instrument(skip(self, item), fields(item_id = %item.id))]
    async fn create_item(&self, item: InventoryItem) -> Result<InventoryItem> {
        let payload = serde_json::to_value(&item)?;

        sqlx::query("INSERT INTO inventory_items (id, payload) VALUES ($1, $2)")
            .bind(item.id.as_uuid())
            .bind(payload)
            .execute(&self.pool)
            .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_item(&self, id: ItemId, fields: NewInventoryItem) -> Result<InventoryItem> {
        let item = InventoryItem {
            id,
            name: fields.name,
            category: fields.category,
            price_half: fields.price_half,
            price_full: fields.price_full,
            stock: fields.stock,
            image: fields.image,
        };
        let payload = serde_json::to_value(&item)?;

        let result = sqlx::query("UPDATE inventory_items SET payload = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(payload)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::item_not_found(id));
        }
        Ok(item)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::item_not_found(id));
        }
        Ok(())
    }
}
