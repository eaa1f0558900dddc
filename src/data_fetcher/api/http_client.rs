//! HTTP client creation and the explicitly passed API client

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::fetch_utils::fetch;
use crate::config::Config;
use crate::error::AppError;

/// Creates a reqwest client with a request timeout and a bounded idle pool.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Client for the federation API.
///
/// Owns the HTTP client and the base URL. Every response with a non-2xx
/// status is turned into an [`AppError`], so callers never see a failed
/// response as data.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.api_base(), config.http_timeout_seconds)
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and decodes the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        fetch(&self.http, url).await
    }
}

/// Creates an API client for testing with the default timeout
#[cfg(test)]
pub fn create_test_api_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test API client")
}
