//! Inventory persistence boundary.

use std::sync::Arc;

use async_trait::async_trait;
use common::ItemId;
use domain::{InventoryItem, NewInventoryItem};

use crate::error::Result;

/// Collaborator owning the catalog of inventory items.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Lists all items in creation order.
    async fn list_items(&self) -> Result<Vec<InventoryItem>>;

    /// Persists a new item (the id is already minted by the caller).
    async fn create_item(&self, item: InventoryItem) -> Result<InventoryItem>;

    /// Wholesale-replaces the item with the given id.
    async fn update_item(&self, id: ItemId, fields: NewInventoryItem) -> Result<InventoryItem>;

    /// Removes the item with the given id.
    ///
    /// Removing a missing id is a not-found error.
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}

#[async_trait]
impl<T: InventoryStore + ?Sized> InventoryStore for Arc<T> {
    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        (**self).list_items().await
    }

    async fn create_item(&self, item: InventoryItem) -> Result<InventoryItem> {
        (**self).create_item(item).await
    }

    async fn update_item(&self, id: ItemId, fields: NewInventoryItem) -> Result<InventoryItem> {
        (**self).update_item(id, fields).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        (**self).delete_item(id).await
    }
}
