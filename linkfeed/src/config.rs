use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://iframe.ly/api/iframely";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    /// Embed provider endpoint (iframely-compatible)
    pub api_url: String,
    /// Credential passed as the `api_key` query parameter
    pub api_key: String,
    /// Per-request timeout for preview fetches
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("EMBED_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("EMBED_API_KEY"))?;

        let api_url = lookup("EMBED_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match lookup("EMBED_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "EMBED_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
