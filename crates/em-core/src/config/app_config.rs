//! Application configuration domain model
//!
//! Every section is optional in the TOML source; missing keys take the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::employee::FieldOptions;
use crate::listing::page::DEFAULT_PAGE_SIZE;

/// Environment variable that overrides `api.base_url`.
pub const ENV_API_BASE_URL: &str = "EMS_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Option sets for the selector fields.
    pub form: FieldOptions,
    pub listing: ListingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, without the `/employees` suffix.
    pub base_url: String,
    /// Per-request timeout applied by the HTTP transport.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub file_name: String,
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "employee_data.csv".to_string(),
            delimiter: ',',
        }
    }
}

impl AppConfig {
    /// Maps a parsed TOML document onto the config, filling gaps with defaults.
    pub fn from_toml(toml_value: &toml::Value) -> Result<Self, ConfigError> {
        Ok(toml_value.clone().try_into::<AppConfig>()?)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base_url;
        }
        self
    }
}
