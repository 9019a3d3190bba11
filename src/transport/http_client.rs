//! HTTP transport against the CurrencyFreaks REST API
//!
//! All endpoints are stateless GET resources authenticated by an `apikey`
//! query parameter. The transport appends the key from the configuration,
//! maps HTTP status codes to error variants and deserializes JSON bodies.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP client trait
///
/// Services are generic over this trait so they can be exercised against a
/// mock server in tests.
#[async_trait]
pub trait FxHttpClient: Send + Sync {
    /// Performs a GET request and deserializes the JSON response body
    ///
    /// # Arguments
    /// * `path` - Resource path relative to the configured base URL
    /// * `query` - Query parameters, excluding the API key
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError>;
}

/// HTTP client implementation backed by reqwest
pub struct FxHttpClientImpl {
    config: Arc<Config>,
    http_client: Client,
}

impl FxHttpClientImpl {
    /// Creates a new transport from the given configuration
    ///
    /// # Errors
    /// `AppError::Network` when the underlying HTTP client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl FxHttpClient for FxHttpClientImpl {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body);
            return Err(AppError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to deserialize response from {}: {}", url, e);
            AppError::Deserialization(format!("{path}: {e}"))
        })
    }
}
