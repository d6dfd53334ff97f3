use anyhow::{Context, Result};

use crate::analysis::models::IdentityPolicy;

/// Application configuration loaded from environment variables.
/// Credentials are optional: a missing one disables its feature, not the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub webhook_url: Option<String>,
    pub identity_policy: IdentityPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            webhook_url: optional_env("N8N_WEBHOOK_URL"),
            identity_policy: optional_env("IDENTITY_POLICY")
                .map(|v| v.parse::<IdentityPolicy>())
                .transpose()
                .context("IDENTITY_POLICY must be 'normalize' or 'preserve'")?
                .unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn model_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn webhook_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

/// Reads an optional variable. Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
