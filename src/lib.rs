pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

use cookable_pantry::{Command, MemoryStore, Seed};

/// Build the in-memory store, seeded from `store.seed_path` when set.
pub fn create_store(config: &Config) -> anyhow::Result<MemoryStore> {
    let Some(path) = &config.store.seed_path else {
        tracing::warn!("No seed configured, starting with an empty store");
        return Ok(MemoryStore::new());
    };

    Ok(MemoryStore::from_seed(Seed::from_path(path)?))
}

/// Create app router
///
/// Shared by the `serve` command and integration tests.
pub fn create_app(config: Config, store: MemoryStore) -> axum::Router {
    routes::router(AppState {
        config,
        command: Command(store),
    })
}
