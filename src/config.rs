//! Runtime configuration for the Jikan client.
//!
//! Priority for the upstream base URL:
//! 1. Explicit value (the `--base-url` flag)
//! 2. `JIKAN_BASE_URL` environment variable
//! 3. Default: https://api.jikan.moe/v4

use std::env;
use std::time::Duration;

use miette::Diagnostic;
use reqwest::Url;
use thiserror::Error;

/// Public Jikan v4 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Environment variable overriding the upstream endpoint.
pub const BASE_URL_ENV: &str = "JIKAN_BASE_URL";

/// Per-request timeout used when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    #[diagnostic(
        code(mal_mcp::config::invalid_base_url),
        help("Pass an absolute http(s) URL via --base-url or JIKAN_BASE_URL.")
    )]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Timeout must be at least one second")]
    #[diagnostic(code(mal_mcp::config::invalid_timeout))]
    InvalidTimeout,
}

/// Immutable settings shared by every tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Upstream endpoint without trailing slash.
    pub base_url: String,
    /// Bound on each upstream request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Resolve configuration from explicit values and the process environment.
    pub fn resolve(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(base_url, timeout_secs, |key| env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the environment.
    pub fn resolve_with(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .or_else(|| lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let timeout = match timeout_secs {
            Some(0) => return Err(ConfigError::InvalidTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    // Request paths are appended to the base as plain text.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "must not contain a query string or fragment".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
