pub mod utils;

pub use utils::HttpMethod;

use gloo_net::http::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Issues requests against the resolved backend. Every path is prefixed with
/// the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        shared::join_url(&self.base_url, path)
    }

    pub fn request(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        utils::request(method, &self.url(path))
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(HttpMethod::Get, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(HttpMethod::Post, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(HttpMethod::Put, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(HttpMethod::Patch, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(HttpMethod::Delete, path)
    }

    /// GETs `path` and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = utils::request(HttpMethod::Get, &url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        if !response.ok() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
