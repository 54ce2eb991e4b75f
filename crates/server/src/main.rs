use server::arbiter::Arbiter;
use server::clients::openrouter::OpenRouterClient;
use server::config;

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    let suggester = OpenRouterClient::from_config(&config);
    if suggester.is_some() {
        tracing::info!("Suggestion service configured (model {})", config.openrouter_model);
    } else {
        tracing::info!("No API key configured - moves will be picked at random");
    }
    let arbiter = Arc::new(Arbiter::new(suggester));

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = server::app(arbiter).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
