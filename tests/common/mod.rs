use std::sync::Arc;

use reqwest::Client;
use server::arbiter::Arbiter;
use server::clients::openrouter::OpenRouterClient;

/// Serve the app on an ephemeral port with no suggestion service
/// configured, so arbitration stays offline. Returns the base URL.
pub async fn spawn_server() -> String {
    let arbiter: Arc<Arbiter<OpenRouterClient>> = Arc::new(Arbiter::new(None));
    let app = server::app(arbiter);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}
