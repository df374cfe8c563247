#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use cookable::Config;
use cookable_pantry::{MemoryStore, Seed};
use cookable_shared::RecipeDocument;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let seed = Seed {
            recipes: vec![
                RecipeDocument::new("Steamed Rice", ["2 cups rice; 1 tsp salt"]),
                RecipeDocument::new(
                    "Garlic Chicken",
                    [
                        "200 g; chicken breast, sliced",
                        "1 clove garlic, minced",
                        "salt to taste",
                    ],
                ),
                RecipeDocument::new("Boiled Eggs", ["3 eggs"]),
            ],
            ..Default::default()
        };
        let store = MemoryStore::from_seed(seed);
        let config = Config::load(None).expect("default config loads");

        Self {
            router: cookable::create_app(config, store.clone()),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

        (status, body)
    }

    pub async fn add_food(&self, username: &str, food_name: &str) -> StatusCode {
        let (status, _) = self
            .request(
                Method::POST,
                "/addFood",
                serde_json::json!({
                    "username": username,
                    "food_name": food_name,
                    "quantity": 1,
                    "expiry_date": "2026-12-31",
                }),
            )
            .await;

        status
    }
}
