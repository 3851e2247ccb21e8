//! Configuration for the search client
//!
//! Settings can come from a YAML or JSON file, the environment, or the
//! builder. Precedence when combined by the CLI: flag > environment > file >
//! defaults.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "PIXABAY_API_KEY";

/// Environment variable overriding the endpoint
pub const BASE_URL_ENV: &str = "PIXABAY_BASE_URL";

// ============================================================================
// Search Config
// ============================================================================

/// Complete configuration for talking to the search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// API credential sent as the `key` query parameter
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client-side request quota
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            rate_limit: RateLimitSettings::default(),
        }
    }
}

/// Request quota, defaulting to Pixabay's 100 requests per 60 seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Whether to throttle at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests allowed per period
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Period length in seconds
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_max_requests() -> u32 {
    100
}

fn default_period_secs() -> u64 {
    60
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: default_max_requests(),
            period_secs: default_period_secs(),
        }
    }
}

impl SearchConfig {
    /// Create a new config builder
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Load config from a YAML or JSON file, chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse config from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Parse config from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    #[must_use]
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Validate the config, returning the API key on success
    pub fn validate(&self) -> Result<&str> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))?;

        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }

        if self.rate_limit.enabled
            && (self.rate_limit.max_requests == 0 || self.rate_limit.period_secs == 0)
        {
            return Err(Error::invalid_value(
                "rate_limit",
                "max_requests and period_secs must be positive",
            ));
        }

        Ok(key)
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP client config
    pub fn http_config(&self) -> HttpClientConfig {
        let builder = HttpClientConfig::builder().timeout(self.timeout());
        if self.rate_limit.enabled {
            builder
                .rate_limit(RateLimiterConfig::new(
                    self.rate_limit.max_requests,
                    Duration::from_secs(self.rate_limit.period_secs),
                ))
                .build()
        } else {
            builder.no_rate_limit().build()
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for search config
#[derive(Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the endpoint URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the request quota
    pub fn rate_limit(mut self, max_requests: u32, period_secs: u64) -> Self {
        self.config.rate_limit = RateLimitSettings {
            enabled: true,
            max_requests,
            period_secs,
        };
        self
    }

    /// Disable client-side throttling
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit.enabled = false;
        self
    }

    /// Build the config
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
