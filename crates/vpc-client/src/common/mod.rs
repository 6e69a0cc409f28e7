//! Common utilities for the VPC API clients
//!
//! Provides the authenticated HTTP wrapper shared by the VPC and Global
//! Tagging clients.

pub mod pagination;

use crate::error::VpcError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default request timeout for every API call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client wrapper with bearer authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

// The bearer token never appears in debug output.
impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Build a `reqwest::Client` with the default timeout and wrap it
    pub fn with_defaults(base_url: String, token: String) -> Result<Self, VpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(VpcError::Http)?;

        Ok(Self::new(client, base_url, token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Make a GET request and decode the JSON body
    ///
    /// A 404 maps to [`VpcError::NotFound`], 401/403 to
    /// [`VpcError::Authentication`], and any other non-success status to
    /// [`VpcError::Api`]. The raw body is kept in every case.
    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, VpcError> {
        let mut url = self.build_url(path);
        if !query.is_empty() {
            url = format!("{}?{}", url, self.build_query_string(query));
        }
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(VpcError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(VpcError::Http)?;

        if status == StatusCode::NOT_FOUND {
            return Err(VpcError::NotFound(format!("{} - {}", path, body)));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(VpcError::Authentication(format!("{} - {}", status, body)));
        }

        if !status.is_success() {
            return Err(VpcError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Build query string from parameters
    pub fn build_query_string(&self, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
