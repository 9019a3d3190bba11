//! Configuration for the CurrencyFreaks API client
//!
//! The API key and base URL are explicit values carried by [`Config`] and
//! handed to the transport at construction time. They are loaded once from
//! the environment (optionally through a `.env` file) and never mutated.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the CurrencyFreaks API client
pub struct Config {
    /// API key sent as the `apikey` query parameter on every request
    pub api_key: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the CurrencyFreaks REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `CURRENCYFREAKS_API_KEY`, `CURRENCYFREAKS_BASE_URL` and
    /// `CURRENCYFREAKS_TIMEOUT`, falling back to defaults when unset.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("CURRENCYFREAKS_API_KEY", String::from("default_api_key"));
        if api_key == "default_api_key" {
            error!("CURRENCYFREAKS_API_KEY not found in environment variables or .env file");
        }

        Config {
            api_key,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "CURRENCYFREAKS_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("CURRENCYFREAKS_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with an explicit API key and base URL
    ///
    /// # Arguments
    /// * `api_key` - API key for the CurrencyFreaks API
    /// * `base_url` - Base URL of the REST API
    pub fn with_api(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}
