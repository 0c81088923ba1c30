//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin. `None` runs against in-memory services.
    pub api_url: Option<String>,
    pub auth_token: Option<String>,
    pub http_timeout: Duration,
    pub page_size: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout = match non_empty("QACM_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("QACM_HTTP_TIMEOUT_SECS", &raw)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let page_size = match non_empty("QACM_PAGE_SIZE") {
            Some(raw) => {
                let size = parse_positive("QACM_PAGE_SIZE", &raw)?;
                u32::try_from(size).map_err(|_| ConfigError::InvalidNumber {
                    var: "QACM_PAGE_SIZE",
                    value: raw,
                })?
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_url: non_empty("QACM_API_URL"),
            auth_token: non_empty("QACM_AUTH_TOKEN"),
            http_timeout,
            page_size,
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, page_size: Option<u32>) -> Self {
        if api_url.is_some() {
            self.api_url = api_url;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        self
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}
