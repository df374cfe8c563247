pub mod availability;
pub mod normalizer;

pub use availability::{InventoryIndex, RecipeAvailability, match_recipe, match_recipes};
pub use normalizer::{IngredientSet, normalize, normalize_segment};
