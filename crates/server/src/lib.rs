pub mod arbiter;
pub mod clients;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use arbiter::Arbiter;
use clients::openrouter::OpenRouterClient;

/// Build the application router. Separate from `main` so tests can
/// serve it on an ephemeral port.
pub fn app(arbiter: Arc<Arbiter<OpenRouterClient>>) -> Router {
    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Move arbitration
        .route("/api/ai-move", post(routes::ai_move::ai_move))
        // Shared state
        .layer(Extension(arbiter))
}
