use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if any required provider credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub sovren_account_id: String,
    pub sovren_service_key: String,
    pub openai_api_key: String,
    /// When true, every extracted highlight is rewritten during upload.
    pub rewrite_on_ingest: bool,
    /// How many rewrite choices to request per highlight.
    pub rewrite_choice_count: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            sovren_account_id: require_env("SOVREN_ACCOUNT_ID")?,
            sovren_service_key: require_env("SOVREN_SERVICE_KEY")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            rewrite_on_ingest: std::env::var("REWRITE_ON_INGEST")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            rewrite_choice_count: std::env::var("REWRITE_CHOICE_COUNT")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("REWRITE_CHOICE_COUNT must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
