use cookable_pantry::{AddFoodInput, Command, MemoryStore, Seed};
use cookable_shared::RecipeDocument;

#[allow(dead_code)]
pub fn setup_command() -> Command<MemoryStore> {
    let seed = Seed {
        recipes: vec![
            RecipeDocument::new("Steamed Rice", ["2 cups rice; 1 tsp salt"]),
            RecipeDocument::new(
                "Chicken Curry",
                [
                    "200 g; chicken breast, sliced",
                    "1 clove garlic, minced",
                    "salt to taste",
                ],
            ),
        ],
        ..Default::default()
    };

    Command(MemoryStore::from_seed(seed))
}

#[allow(dead_code)]
pub fn add_input(username: &str, food_name: &str) -> AddFoodInput {
    AddFoodInput {
        username: username.to_owned(),
        food_name: food_name.to_owned(),
        quantity: 1,
        expiry_date: "2026-12-31".to_owned(),
    }
}

#[allow(dead_code)]
pub async fn add_foods(
    cmd: &Command<MemoryStore>,
    username: &str,
    names: impl IntoIterator<Item = &str>,
) -> anyhow::Result<()> {
    for name in names {
        cmd.add_food(add_input(username, name)).await?;
    }

    Ok(())
}
