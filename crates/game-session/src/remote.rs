use reqwest::Client;
use serde_json::{json, Value};

use crate::provider::{MoveProvider, ProviderError};
use async_trait::async_trait;

/// HTTP client for the server's `/api/ai-move` endpoint.
pub struct RemoteArbiter {
    client: Client,
    base_url: String,
}

impl RemoteArbiter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("LlmChess/1.0")
            .build()
            .unwrap();
        RemoteArbiter {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MoveProvider for RemoteArbiter {
    async fn ai_move(&self, fen: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/ai-move", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&json!({ "fen": fen }))
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("request error: {e}")))?;

        // The server answers 400 only for positions with no legal moves.
        if resp.status() == reqwest::StatusCode::BAD_REQUEST {
            return Err(ProviderError::NoLegalMoves);
        }

        if !resp.status().is_success() {
            return Err(ProviderError::Unavailable(format!("HTTP {}", resp.status())));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("body read error: {e}")))?;

        body.get("move")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ProviderError::Unavailable("response missing move field".to_string()))
    }
}
