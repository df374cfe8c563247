use std::collections::HashMap;

use cookable_shared::{InventoryItem, RecipeDocument, title_case};
use serde::{Deserialize, Serialize};

use crate::normalizer::normalize;

/// Availability of one recipe against a user's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAvailability {
    #[serde(rename = "recipe_title")]
    pub title: Option<String>,
    #[serde(rename = "recipe_steps")]
    pub steps: serde_json::Value,
    #[serde(rename = "ingredient_details")]
    pub raw_ingredient_lines: Vec<String>,
    /// Inventory names, spelled as the user stored them.
    #[serde(rename = "available_ingredients")]
    pub available: Vec<String>,
    /// Canonical names missing from the inventory, title-cased.
    #[serde(rename = "unavailable_ingredients")]
    pub unavailable: Vec<String>,
    pub total_ingredients: usize,
}

impl RecipeAvailability {
    pub fn is_complete(&self) -> bool {
        self.unavailable.is_empty()
    }
}

/// Case-insensitive lookup over the active part of an inventory.
///
/// Keys are trimmed lowercase names, values the trimmed names as stored.
/// When two active items share a key the later one wins.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    names: HashMap<String, String>,
}

impl InventoryIndex {
    pub fn new<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        let names = items
            .into_iter()
            .filter(|item| item.is_active())
            .map(|item| (item.key(), item.food_name.trim().to_owned()))
            .collect();

        Self { names }
    }

    pub fn get(&self, canonical: &str) -> Option<&str> {
        self.names.get(canonical).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Split one recipe's canonical ingredients into available and missing.
pub fn match_recipe(index: &InventoryIndex, recipe: &RecipeDocument) -> RecipeAvailability {
    let parsed = normalize(&recipe.ingredients);

    let mut available = Vec::new();
    let mut unavailable = Vec::new();

    for ingredient in &parsed {
        match index.get(ingredient) {
            Some(name) => available.push(name.to_owned()),
            None => unavailable.push(title_case(ingredient)),
        }
    }

    RecipeAvailability {
        title: recipe.recipe_title.clone(),
        steps: recipe.recipe_steps.clone(),
        raw_ingredient_lines: recipe.ingredients.clone(),
        available,
        unavailable,
        total_ingredients: parsed.len(),
    }
}

/// Match every recipe against the inventory and rank the results.
///
/// Recipes with more canonical ingredients come first. The sort is stable,
/// so recipes with the same count keep their catalog order.
pub fn match_recipes(
    inventory: &[InventoryItem],
    recipes: &[RecipeDocument],
) -> Vec<RecipeAvailability> {
    let index = InventoryIndex::new(inventory);

    let mut results = recipes
        .iter()
        .map(|recipe| match_recipe(&index, recipe))
        .collect::<Vec<_>>();

    results.sort_by(|a, b| b.total_ingredients.cmp(&a.total_ingredients));

    tracing::debug!(
        inventory = index.len(),
        recipes = results.len(),
        complete = results.iter().filter(|r| r.is_complete()).count(),
        "recipes matched against inventory"
    );

    results
}
