use anyhow::Result;
use cookable_pantry::{Command, MemoryStore, Seed};
use serde_json::json;

/// Runs the availability matching offline and prints the response body the
/// HTTP endpoint would return.
pub async fn run(seed: String, username: String) -> Result<()> {
    let command = Command(MemoryStore::from_seed(Seed::from_path(&seed)?));

    let recipes = command.recipes_with_availability(&username).await?;
    tracing::info!(username = %username, recipes = recipes.len(), "Recipes matched");

    println!("{}", serde_json::to_string_pretty(&json!({ "recipes": recipes }))?);

    Ok(())
}
