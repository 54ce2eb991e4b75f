use std::env;

/// Value shipped in .env templates; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

const DEFAULT_MODEL: &str = "nousresearch/deephermes-3-llama-3-8b-preview:free";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            openrouter_api_key: normalize_key(env::var("OPENROUTER_API_KEY").ok()),
            openrouter_model: env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

/// An absent, empty, or placeholder key all mean "no credential".
fn normalize_key(key: Option<String>) -> Option<String> {
    key.filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
}
