//! Configuration management for the VIN Decoder MCP Server
//!
//! Handles the upstream endpoint, the omitted-value sentinels, and
//! environment variable overrides.

use crate::error::{ConfigError, Result};

/// Environment variable overriding the vPIC base URL
pub const ENV_API_BASE_URL: &str = "VPIC_API_BASE_URL";

/// Environment variable overriding the omitted-value sentinels (comma separated)
pub const ENV_OMITTED_VALUES: &str = "VPIC_OMITTED_VALUES";

/// Configuration for the VIN Decoder MCP Server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the vPIC vehicles API, without trailing slash
    pub api_base_url: String,

    /// Upstream values treated as "no data" and left out of `vehicle_info`.
    /// Null and empty values are always omitted.
    pub omitted_values: Vec<String>,
}

impl Config {
    /// Create a new configuration from the process environment
    pub fn new() -> Result<Self> {
        Self::load(None)
    }

    /// Create a configuration from the process environment, with the base
    /// URL taken from `api_base_url` (CLI flag) when given
    pub fn load(api_base_url: Option<String>) -> Result<Self> {
        Self::from_lookup_with_override(|key| std::env::var(key).ok(), api_base_url)
    }

    /// Create a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_override(lookup, None)
    }

    /// Create a configuration from a key lookup. A given `api_base_url`
    /// replaces the looked-up one before validation.
    pub fn from_lookup_with_override<F>(lookup: F, api_base_url: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = api_base_url
            .or_else(|| lookup(ENV_API_BASE_URL))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| vpic::API_BASE_URL.to_string());

        let omitted_values = match lookup(ENV_OMITTED_VALUES) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
            None => default_omitted_values(),
        };

        Self {
            api_base_url,
            omitted_values,
        }
        .with_api_base_url(None)
    }

    /// Override the base URL (CLI flag) and validate the result
    pub fn with_api_base_url(mut self, api_base_url: Option<String>) -> Result<Self> {
        if let Some(url) = api_base_url {
            self.api_base_url = url;
        }

        let url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig {
                message: format!("API base URL must be http(s): {}", self.api_base_url),
            }
            .into());
        }
        self.api_base_url = url;

        Ok(self)
    }

    /// Whether an upstream value is one of the configured sentinels
    pub fn is_omitted(&self, value: &str) -> bool {
        value.is_empty() || self.omitted_values.iter().any(|v| v == value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: vpic::API_BASE_URL.to_string(),
            omitted_values: default_omitted_values(),
        }
    }
}

fn default_omitted_values() -> Vec<String> {
    vpic::DEFAULT_OMITTED_VALUES
        .iter()
        .map(|v| v.to_string())
        .collect()
}

/// vPIC API constants
pub mod vpic {
    /// Base URL for the NHTSA vPIC vehicles API
    pub const API_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

    /// Path segment of the decode endpoint
    pub const DECODE_VIN_PATH: &str = "decodevin";

    /// Response format requested from the API
    pub const FORMAT: &str = "json";

    /// Name of the result-row list in the response body
    pub const RESULTS_FIELD: &str = "Results";

    /// Sentinels the API uses for attributes it has no data for
    pub const DEFAULT_OMITTED_VALUES: &[&str] = &["Not Applicable"];
}
