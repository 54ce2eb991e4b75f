use reqwest::Client;
use serde_json::{json, Value};

use crate::arbiter::MoveSuggester;
use crate::config::Config;
use async_trait::async_trait;

const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Response-length cap; one short move token is all that is needed.
const MAX_TOKENS: u32 = 20;

pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    /// Build a client from the configured credential. Returns `None`
    /// when no usable key is present, which keeps arbitration fully
    /// offline.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.openrouter_api_key.clone()?;
        let client = Client::builder()
            .user_agent("LlmChess/1.0")
            .build()
            .unwrap();
        Some(OpenRouterClient {
            client,
            api_key,
            model: config.openrouter_model.clone(),
        })
    }
}

#[async_trait]
impl MoveSuggester for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": MAX_TOKENS,
        });

        let resp = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("HTTP {}", resp.status());
        }

        let body: Value = resp.json().await?;
        let text = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("response missing message content"))?;

        tracing::debug!(%text, "suggestion service replied");
        Ok(text.to_string())
    }
}
