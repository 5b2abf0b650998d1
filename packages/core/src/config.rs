//! Location of the remote estimation service.

use thiserror::Error;

/// Public estimation service used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://recipe-vyb.onrender.com";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "NUTRITION_API_URL";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// Estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Base URL without a trailing slash.
    base_url: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl EstimatorConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() => Ok(Self {
                base_url: trimmed.to_string(),
            }),
            _ => Err(ConfigError::InvalidBaseUrl(raw)),
        }
    }

    /// Use `value` when it is set and non-blank, the default otherwise.
    pub fn resolve(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Ok(Self::default()),
        }
    }

    /// Read the base URL from `NUTRITION_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(value.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the estimate endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/estimate", self.base_url)
    }
}
