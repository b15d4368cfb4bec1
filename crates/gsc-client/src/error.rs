//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when talking to the Search Console API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/HTTP transport errors.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    /// Carries the server's own message when one was given.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body that could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

// Convert from reqwest::Error to our error type. The message is
// extracted immediately so the enum owns plain data.
impl From<reqwest::Error> for ClientError {
    #[inline]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
