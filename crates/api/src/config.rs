use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Redis URL for the shared quote cache. Without it an in-process cache is
    /// used, which only holds for a single instance.
    #[serde(default)]
    pub redis_url: Option<String>,
    /// Language quotes are stored in. Requests for it skip translation.
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// LibreTranslate-compatible endpoint (e.g., http://localhost:5000)
    #[serde(default)]
    pub translate_url: Option<String>,
    #[serde(default)]
    pub translate_api_key: Option<String>,
    #[serde(default = "default_translate_timeout_ms")]
    pub translate_timeout_ms: u64,
    /// Set to "production" for JSON logging, anything else for human-readable.
    #[serde(default)]
    pub env: String,
    /// Sentry DSN for error tracking
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

fn default_lang() -> String {
    "en".into()
}

fn default_translate_timeout_ms() -> u64 {
    3000
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}
