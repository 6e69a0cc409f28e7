//! VPC client errors

use thiserror::Error;

/// Errors that can occur when interacting with the VPC or Global Tagging APIs
#[derive(Debug, Error)]
pub enum VpcError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status; carries the raw response
    #[error("VPC API error: {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (invalid token, expired, etc.)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with something the client cannot act on
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid request (e.g., empty identifier)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
