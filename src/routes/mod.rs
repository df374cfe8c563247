use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use cookable_pantry::{Command, MemoryStore};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod foods;
mod health;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: Command<MemoryStore>,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/getFoodlistBasedUser", post(foods::list))
        .route("/addFood", post(foods::add))
        .route("/DeleteFood", patch(foods::delete))
        .route(
            "/getRecipesWithAvailability",
            post(recipes::with_availability),
        )
        .fallback(fallback)
        .with_state(app_state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
