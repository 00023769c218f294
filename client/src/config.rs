//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is static, so settings come from environment variables captured
//! at compile time (`ESCROW_API_BASE_URL`, `ESCROW_LOG_LEVEL`) with local
//! development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// API root used when `ESCROW_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "escrow_token";

/// `localStorage` key holding the JSON-serialized user.
pub const USER_STORAGE_KEY: &str = "escrow_user";

/// Settings shared by the HTTP client and the CSR entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://api.example.com/api`.
    pub api_base_url: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build a config for `api_base_url` with the default log level.
    pub fn new(api_base_url: &str) -> Self {
        Self { api_base_url: normalize_base_url(api_base_url), log_level: log::Level::Info }
    }

    /// Read overrides captured from the build environment.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ESCROW_API_BASE_URL"), option_env!("ESCROW_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        };
        if let Some(raw) = log_level {
            match log::Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring invalid ESCROW_LOG_LEVEL {raw:?}"),
            }
        }
        config
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
