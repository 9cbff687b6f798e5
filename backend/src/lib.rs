pub mod config;
pub mod error;
pub mod game;
pub mod messages;
mod routes;

use axum::{Router, http::HeaderValue, routing::get};
use config::Config;
use game::GameStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

async fn health() -> &'static str {
    "ok"
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GameStore>,
}

/// Router with a fresh store and default configuration
pub fn app() -> Router {
    app_with_config(Arc::new(GameStore::new()), &Config::default())
}

pub fn app_with_config(store: Arc<GameStore>, config: &Config) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(cors_layer(&config.cors_origin))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!(origin, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}
