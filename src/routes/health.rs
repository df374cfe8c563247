use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Reports how many recipes the catalog currently holds
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let recipes = app_state.command.0.total_recipes().await;

    (
        StatusCode::OK,
        Json(json!({"status": "ready", "recipes": recipes})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
