//! Error types for the credential layer.
//!
//! We use a simple enum with `thiserror` for ergonomic error handling.
//! External errors are converted into owned data at the boundary so the
//! enum stays free of generic parameters and boxed trait objects.

use thiserror::Error;

/// Errors that can occur while loading, refreshing, or obtaining credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential or secrets file could not be read or written.
    #[error("credential file error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid credential bundle or secrets document.
    #[error("malformed credential file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Access token is expired and no refresh token is present.
    #[error("credentials expired and no refresh token is present; re-run authorization")]
    Expired,

    /// The configured authorization endpoint is not a valid URL.
    #[error("invalid authorization endpoint: {0}")]
    InvalidEndpoint(String),

    /// Unrecognized scope name.
    #[error("invalid scope: {0} (expected readonly or full)")]
    InvalidScope(String),

    /// Network/HTTP errors talking to the token endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// The token endpoint rejected the request.
    #[error("token endpoint error ({status}): {message}")]
    TokenEndpoint { status: u16, message: String },
}

// Convert from reqwest::Error to our error type. We extract the message
// immediately instead of storing the error itself.
impl From<reqwest::Error> for AuthError {
    #[inline]
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(err.to_string())
    }
}
