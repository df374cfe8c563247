use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cookable_shared::{InventoryItem, RecipeDocument};
use tokio::sync::RwLock;

use crate::Seed;

/// Backend holding food lists and the recipe catalog.
///
/// Passed into [`crate::Command`] by the caller; nothing in this crate keeps
/// a global handle.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// `None` when the user has no food list document yet.
    async fn food_list(
        &self,
        username: &str,
    ) -> cookable_shared::Result<Option<Vec<InventoryItem>>>;

    /// Apply `update` to the user's food list in one step, starting from an
    /// empty list when the user has none. Nothing is stored when `update`
    /// returns an error.
    async fn update_food_list<T, F>(
        &self,
        username: &str,
        update: F,
    ) -> cookable_shared::Result<T>
    where
        T: Send,
        F: FnOnce(&mut Vec<InventoryItem>) -> cookable_shared::Result<T> + Send;

    /// Every recipe of the shared catalog, in catalog order.
    async fn recipes(&self) -> cookable_shared::Result<Vec<RecipeDocument>>;
}

#[derive(Debug, Default)]
struct Records {
    food_lists: HashMap<String, Vec<InventoryItem>>,
    recipes: Vec<RecipeDocument>,
}

/// In-process [`RecordStore`]. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Records>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            records: Arc::new(RwLock::new(Records {
                food_lists: seed.food_lists.into_iter().collect(),
                recipes: seed.recipes,
            })),
        }
    }

    pub async fn insert_recipe(&self, recipe: RecipeDocument) {
        self.records.write().await.recipes.push(recipe);
    }

    pub async fn total_recipes(&self) -> usize {
        self.records.read().await.recipes.len()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn food_list(
        &self,
        username: &str,
    ) -> cookable_shared::Result<Option<Vec<InventoryItem>>> {
        Ok(self.records.read().await.food_lists.get(username).cloned())
    }

    async fn update_food_list<T, F>(
        &self,
        username: &str,
        update: F,
    ) -> cookable_shared::Result<T>
    where
        T: Send,
        F: FnOnce(&mut Vec<InventoryItem>) -> cookable_shared::Result<T> + Send,
    {
        let mut records = self.records.write().await;
        let mut items = records.food_lists.get(username).cloned().unwrap_or_default();

        let output = update(&mut items)?;
        records.food_lists.insert(username.to_owned(), items);

        Ok(output)
    }

    async fn recipes(&self) -> cookable_shared::Result<Vec<RecipeDocument>> {
        Ok(self.records.read().await.recipes.clone())
    }
}
