use common::ItemId;
use domain::{InventoryItem, NewInventoryItem};
use store::InventoryStore;

use crate::dashboard::Confirmation;
use crate::error::Result;
use crate::filter::InventoryFilter;

/// Inventory management view: a refreshable snapshot of the catalog with
/// filtering and the add/edit/delete operations exposed to admins.
#[derive(Debug)]
pub struct InventoryPanel<S> {
    store: S,
    items: Vec<InventoryItem>,
}

impl<S: InventoryStore> InventoryPanel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Reloads the snapshot from the backing store.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<()> {
        self.items = self.store.list_items().await?;
        Ok(())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn filtered(&self, filter: &InventoryFilter) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    /// Distinct categories in first-appearance order, for the filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    /// Validates and stores a new item, minting its id.
    #[tracing::instrument(skip(self, new_item))]
    pub async fn add_item(&mut self, new_item: NewInventoryItem) -> Result<InventoryItem> {
        let item = new_item.into_item()?;
        let stored = self.store.create_item(item).await?;
        self.items.push(stored.clone());
        metrics::counter!("admin_items_added").increment(1);
        tracing::info!(item_id = %stored.id, name = %stored.name, "inventory item added");
        Ok(stored)
    }

    /// Replaces every field of an existing item.
    #[tracing::instrument(skip(self, new_item))]
    pub async fn update_item(
        &mut self,
        id: ItemId,
        new_item: NewInventoryItem,
    ) -> Result<InventoryItem> {
        new_item.validate()?;
        let updated = self.store.update_item(id, new_item).await?;
        if let Some(local) = self.items.iter_mut().find(|i| i.id == id) {
            *local = updated.clone();
        }
        tracing::info!(item_id = %id, "inventory item updated");
        Ok(updated)
    }

    /// Deletes an item once the admin confirms. Returns `false` when the
    /// prompt was cancelled.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&mut self, id: ItemId, confirmation: Confirmation) -> Result<bool> {
        if confirmation == Confirmation::Cancelled {
            return Ok(false);
        }
        self.store.delete_item(id).await?;
        self.items.retain(|i| i.id != id);
        metrics::counter!("admin_items_deleted").increment(1);
        tracing::info!(item_id = %id, "inventory item deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;
    use domain::DomainError;
    use store::memory::InMemoryInventoryStore;

    fn new_item(name: &str, category: &str) -> NewInventoryItem {
        NewInventoryItem {
            name: name.to_string(),
            category: category.to_string(),
            price_half: Money::from_paisa(12_000),
            price_full: Money::from_paisa(20_000),
            stock: 10,
            image: "item.jpg".to_string(),
        }
    }

    async fn panel_with(
        items: Vec<NewInventoryItem>,
    ) -> (InventoryPanel<InMemoryInventoryStore>, InMemoryInventoryStore) {
        let store = InMemoryInventoryStore::default();
        let mut panel = InventoryPanel::new(store.clone());
        for item in items {
            panel.add_item(item).await.unwrap();
        }
        (panel, store)
    }

    #[tokio::test]
    async fn add_item_validates_required_fields() {
        let (mut panel, store) = panel_with(vec![]).await;
        let err = panel.add_item(new_item("", "Coffee")).await.unwrap_err();
        assert!(matches!(
            err,
            crate::AdminError::Validation(DomainError::BlankField { field: "name" })
        ));
        assert_eq!(store.item_count().await, 0);
    }

    #[tokio::test]
    async fn categories_are_distinct_in_first_appearance_order() {
        let (panel, _) = panel_with(vec![
            new_item("Latte", "Coffee"),
            new_item("Green Tea", "Tea"),
            new_item("Mocha", "Coffee"),
            new_item("Brownie", "Dessert"),
        ])
        .await;
        assert_eq!(panel.categories(), vec!["Coffee", "Tea", "Dessert"]);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let (mut panel, store) = panel_with(vec![new_item("Latte", "Coffee")]).await;
        let id = panel.items()[0].id;

        let mut edit = new_item("Iced Latte", "Cold Coffee");
        edit.stock = 3;
        let updated = panel.update_item(id, edit).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Iced Latte");
        assert_eq!(updated.category, "Cold Coffee");
        assert_eq!(updated.stock, 3);

        let persisted = store.list_items().await.unwrap();
        assert_eq!(persisted[0].name, "Iced Latte");
    }

    #[tokio::test]
    async fn update_rejects_blank_fields_before_touching_store() {
        let (mut panel, store) = panel_with(vec![new_item("Latte", "Coffee")]).await;
        let id = panel.items()[0].id;

        let err = panel.update_item(id, new_item("Latte", "")).await.unwrap_err();
        assert!(matches!(
            err,
            crate::AdminError::Validation(DomainError::BlankField { field: "category" })
        ));
        assert_eq!(store.list_items().await.unwrap()[0].category, "Coffee");
    }

    #[tokio::test]
    async fn cancelled_delete_keeps_item() {
        let (mut panel, store) = panel_with(vec![new_item("Latte", "Coffee")]).await;
        let id = panel.items()[0].id;

        let deleted = panel.delete_item(id, Confirmation::Cancelled).await.unwrap();
        assert!(!deleted);
        assert_eq!(store.item_count().await, 1);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_item() {
        let (mut panel, store) = panel_with(vec![new_item("Latte", "Coffee")]).await;
        let id = panel.items()[0].id;

        let deleted = panel.delete_item(id, Confirmation::Confirmed).await.unwrap();
        assert!(deleted);
        assert_eq!(store.item_count().await, 0);
        assert!(panel.items().is_empty());
    }
}
