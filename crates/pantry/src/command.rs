use cookable_matching::{RecipeAvailability, match_recipes};
use cookable_shared::{InventoryItem, bail, not_found, title_case};
use time::{Date, macros::format_description};
use validator::Validate;

use crate::RecordStore;

#[derive(Debug, Clone, Validate)]
pub struct AddFoodInput {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 100))]
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Validate)]
pub struct DeleteFoodInput {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    pub food_name: String,
    /// Compared with the stored quantity as text, so `"5"` matches `5`
    /// while `"05"` and `5.0` do not.
    pub quantity: String,
    pub expiry_date: String,
}

#[derive(Clone)]
pub struct Command<S: RecordStore>(pub S);

impl<S: RecordStore> Command<S> {
    /// Non-deleted foods of the user. Creates an empty food list for
    /// unknown users.
    #[tracing::instrument(skip(self))]
    pub async fn active_foods(
        &self,
        username: &str,
    ) -> cookable_shared::Result<Vec<InventoryItem>> {
        self.0
            .update_food_list(username, |foods| {
                Ok(foods.iter().filter(|food| food.is_active()).cloned().collect())
            })
            .await
    }

    /// Returns the whole food list after the insert, deleted entries included.
    #[tracing::instrument(skip(self, input), fields(username = %input.username))]
    pub async fn add_food(
        &self,
        input: AddFoodInput,
    ) -> cookable_shared::Result<Vec<InventoryItem>> {
        input.validate()?;

        let key = input.food_name.trim().to_lowercase();
        let expiry_date = format_expiry_date(&input.expiry_date);
        let food_name = title_case(input.food_name.trim());
        let quantity = input.quantity;

        let foods = self
            .0
            .update_food_list(&input.username, move |foods| {
                if foods.iter().any(|food| food.is_active() && food.key() == key) {
                    bail!("Food already exists");
                }

                let Some(expiry_date) = expiry_date else {
                    bail!("Invalid date format. Use YYYY-MM-DD.");
                };

                foods.push(InventoryItem {
                    food_name,
                    quantity,
                    expiry_date,
                    is_deleted: false,
                });

                Ok(foods.clone())
            })
            .await?;

        tracing::info!(total = foods.len(), "food added");

        Ok(foods)
    }

    /// Flags the first active food matching name, quantity and expiry date
    /// as deleted.
    #[tracing::instrument(skip(self, input), fields(username = %input.username))]
    pub async fn delete_food(&self, input: DeleteFoodInput) -> cookable_shared::Result<()> {
        input.validate()?;

        let key = input.food_name.trim().to_lowercase();

        let deleted = self
            .0
            .update_food_list(&input.username, |foods| {
                let Some(food) = foods.iter_mut().find(|food| {
                    food.is_active()
                        && food.food_name.to_lowercase() == key
                        && food.quantity.to_string() == input.quantity
                        && food.expiry_date == input.expiry_date
                }) else {
                    not_found!("Matching food not found");
                };

                food.is_deleted = true;

                Ok(food.food_name.clone())
            })
            .await?;

        tracing::info!(food = %deleted, "food deleted");

        Ok(())
    }

    /// Every catalog recipe with its available and missing ingredients,
    /// largest recipes first.
    #[tracing::instrument(skip(self))]
    pub async fn recipes_with_availability(
        &self,
        username: &str,
    ) -> cookable_shared::Result<Vec<RecipeAvailability>> {
        let Some(foods) = self.0.food_list(username).await? else {
            not_found!("User not found");
        };

        let recipes = self.0.recipes().await?;

        Ok(match_recipes(&foods, &recipes))
    }
}

/// Parses a `YYYY-MM-DD` date and writes it back zero-padded.
fn format_expiry_date(value: &str) -> Option<String> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(value, format).ok()?;

    date.format(format).ok()
}
