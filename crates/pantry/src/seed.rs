use std::collections::BTreeMap;
use std::path::Path;

use cookable_shared::{InventoryItem, RecipeDocument};
use serde::{Deserialize, Serialize};

/// Initial content of a [`crate::MemoryStore`].
///
/// ```json
/// {
///   "food_lists": { "john": [{ "food_name": "Rice", "isDeleted": false }] },
///   "recipes": [{ "recipe_title": "Rice", "ingredients": ["2 cups rice"] }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub food_lists: BTreeMap<String, Vec<InventoryItem>>,
    #[serde(default)]
    pub recipes: Vec<RecipeDocument>,
}

impl Seed {
    pub fn from_path(path: impl AsRef<Path>) -> cookable_shared::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let seed = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            food_lists = seed.food_lists.len(),
            recipes = seed.recipes.len(),
            "seed loaded"
        );

        Ok(seed)
    }

    pub fn from_json(content: &str) -> cookable_shared::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
