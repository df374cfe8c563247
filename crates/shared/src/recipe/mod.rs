use serde::{Deserialize, Serialize};

/// Recipe as stored in the shared catalog.
///
/// `recipe_steps` is opaque to this system and is echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDocument {
    #[serde(default)]
    pub recipe_title: Option<String>,
    #[serde(default)]
    pub recipe_steps: serde_json::Value,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecipeDocument {
    pub fn new<I, S>(title: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recipe_title: Some(title.into()),
            recipe_steps: serde_json::Value::Null,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
