//! Inventory (catalog) item model.

use common::{ItemId, Money};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A catalog item curated by the admin.
///
/// Independent of orders: menu items referenced in orders are copied by
/// value, so edits here never change past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price_half: Money,
    pub price_full: Money,
    pub stock: u32,
    pub image: String,
}

/// Fields for creating or wholesale-replacing an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub price_half: Money,
    pub price_full: Money,
    pub stock: u32,
    pub image: String,
}

impl NewInventoryItem {
    /// Checks that every textual field is non-blank.
    ///
    /// Numeric coercion happens at the API/import boundary; by the time
    /// fields reach this type they are already typed.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("image", &self.image),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::BlankField { field });
            }
        }
        Ok(())
    }

    /// Validates the fields and mints an item with a fresh ID.
    pub fn into_item(self) -> Result<InventoryItem, DomainError> {
        self.validate()?;
        Ok(InventoryItem {
            id: ItemId::new(),
            name: self.name,
            category: self.category,
            price_half: self.price_half,
            price_full: self.price_full,
            stock: self.stock,
            image: self.image,
        })
    }

    /// Validates the fields and applies them wholesale to an existing ID.
    pub fn into_item_with_id(self, id: ItemId) -> Result<InventoryItem, DomainError> {
        self.validate()?;
        Ok(InventoryItem {
            id,
            name: self.name,
            category: self.category,
            price_half: self.price_half,
            price_full: self.price_full,
            stock: self.stock,
            image: self.image,
        })
    }
}

impl From<InventoryItem> for NewInventoryItem {
    fn from(item: InventoryItem) -> Self {
        Self {
            name: item.name,
            category: item.category,
            price_half: item.price_half,
            price_full: item.price_full,
            stock: item.stock,
            image: item.image,
        }
    }
}
