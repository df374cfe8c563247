use serde::{Deserialize, Serialize};

/// One entry of a user's food list.
///
/// Entries are never removed, only flagged with `isDeleted`. `quantity` and
/// `expiry_date` are carried for the inventory screens and do not take part
/// in recipe matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub food_name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

impl InventoryItem {
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Key used for every case-insensitive comparison against this item.
    pub fn key(&self) -> String {
        self.food_name.trim().to_lowercase()
    }
}
