//! Catalog configuration parsed from environment variables.

use super::types::CatalogError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const API_KEY_VAR: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub timeouts: CatalogTimeouts,
}

impl CatalogConfig {
    /// Build typed catalog config from environment variables.
    ///
    /// Required:
    /// - `TMDB_API_KEY`
    ///
    /// Optional:
    /// - `TMDB_BASE_URL`: default `https://api.themoviedb.org/3`
    /// - `TMDB_IMAGE_BASE_URL`: default `https://image.tmdb.org/t/p`
    /// - `TMDB_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TMDB_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// [`CatalogError::MissingApiKey`] when `TMDB_API_KEY` is not set.
    pub fn from_env() -> Result<Self, CatalogError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| CatalogError::MissingApiKey { var: API_KEY_VAR.into() })?;
        Ok(Self::with_api_key(api_key))
    }

    /// Config with the given key and env-var or default everything else.
    #[must_use]
    pub fn with_api_key(api_key: String) -> Self {
        let base_url = std::env::var("TMDB_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = CatalogTimeouts {
            request_secs: env_parse_u64("TMDB_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TMDB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self { api_key, base_url, image_base_url, timeouts }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
