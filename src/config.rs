//! API connection settings.
//!
//! The base URL and bearer token are injected configuration, resolved from
//! command-line flags first and environment variables second. Nothing is
//! compiled in; tests point the client at a mock service the same way.

use anyhow::{anyhow, Result};
use std::env;

/// Environment variable for the API base URL.
pub const ENV_API_URL: &str = "TEAMCMD_API_URL";
/// Environment variable for the bearer token.
pub const ENV_API_TOKEN: &str = "TEAMCMD_API_TOKEN";

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Connection settings for the teams API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: String,
}

impl ApiConfig {
    /// Resolve configuration. Flag values take precedence over environment
    /// variables; the base URL falls back to localhost, the token has no
    /// fallback.
    pub fn resolve(url_flag: Option<String>, token_flag: Option<String>) -> Result<Self> {
        let base_url = url_flag
            .or_else(|| env::var(ENV_API_URL).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let auth_token = token_flag
            .or_else(|| env::var(ENV_API_TOKEN).ok())
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("API token not set. Pass --token or set {}.", ENV_API_TOKEN)
            })?;

        Ok(Self {
            base_url,
            auth_token,
        })
    }
}
