use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppResult, routes::AppState, routes::foods::UsernameInput};

/// POST /getRecipesWithAvailability
///
/// Every catalog recipe with the ingredients the user has and lacks,
/// recipes with the most ingredients first.
pub async fn with_availability(
    State(app_state): State<AppState>,
    payload: Result<Json<UsernameInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let username = input.required()?;

    let recipes = app_state
        .command
        .recipes_with_availability(&username)
        .await?;

    Ok(Json(json!({ "recipes": recipes })))
}
