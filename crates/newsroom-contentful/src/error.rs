//! Error types for the Content Delivery API client.

/// Error from Content Delivery API operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentfulError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("Contentful error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(String),
}
