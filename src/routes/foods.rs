use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use cookable_pantry::{AddFoodInput, DeleteFoodInput};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::{AppError, AppResult},
    routes::AppState,
};

#[derive(Deserialize)]
pub struct UsernameInput {
    pub username: Option<Value>,
}

impl UsernameInput {
    pub fn required(self) -> AppResult<String> {
        text(self.username)
            .filter(|username| !username.is_empty())
            .ok_or_else(|| AppError::BadRequest("Username is required".to_owned()))
    }
}

/// Body shared by `/addFood` and `/DeleteFood`. Every field must be present.
#[derive(Deserialize)]
pub struct FoodInput {
    pub username: Option<Value>,
    pub food_name: Option<Value>,
    pub quantity: Option<Value>,
    pub expiry_date: Option<Value>,
}

struct RequiredFood {
    username: String,
    food_name: String,
    quantity: Value,
    expiry_date: String,
}

impl FoodInput {
    fn required(self, missing: &str) -> AppResult<RequiredFood> {
        let (Some(username), Some(food_name), Some(quantity), Some(expiry_date)) = (
            text(self.username),
            text(self.food_name),
            self.quantity.filter(|quantity| !quantity.is_null()),
            text(self.expiry_date),
        ) else {
            return Err(AppError::BadRequest(missing.to_owned()));
        };

        Ok(RequiredFood {
            username,
            food_name,
            quantity,
            expiry_date,
        })
    }
}

/// Only JSON strings count as text fields.
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Accepts `3` as well as `"3"`.
fn parse_quantity(value: &Value) -> AppResult<i64> {
    let quantity = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    quantity.ok_or_else(|| AppError::BadRequest("Quantity must be a whole number".to_owned()))
}

/// `"5"` and `5` both read as `5`; `5.0` stays `5.0`.
fn quantity_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// POST /getFoodlistBasedUser
pub async fn list(
    State(app_state): State<AppState>,
    payload: Result<Json<UsernameInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let username = input.required()?;

    let foods = app_state.command.active_foods(&username).await?;

    Ok(Json(foods))
}

/// POST /addFood
pub async fn add(
    State(app_state): State<AppState>,
    payload: Result<Json<FoodInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let food = input.required("Please Fill all the fields before adding!")?;

    let foods = app_state
        .command
        .add_food(AddFoodInput {
            username: food.username,
            food_name: food.food_name,
            quantity: parse_quantity(&food.quantity)?,
            expiry_date: food.expiry_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(foods)))
}

/// PATCH /DeleteFood
pub async fn delete(
    State(app_state): State<AppState>,
    payload: Result<Json<FoodInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let food = input.required("Missing required fields")?;
    let message = format!("Food '{}' deleted", food.food_name);

    app_state
        .command
        .delete_food(DeleteFoodInput {
            username: food.username,
            food_name: food.food_name,
            quantity: quantity_text(&food.quantity),
            expiry_date: food.expiry_date,
        })
        .await?;

    Ok(Json(json!({ "message": message })))
}
