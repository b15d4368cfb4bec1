//! Error types for the fetch layer.

use thiserror::Error;

/// Errors that can occur while fetching, normalizing, or writing
/// statistics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API call itself failed.
    #[error(transparent)]
    Client(#[from] gsc_client::ClientError),

    /// A response row did not carry the keys the requested breakdown
    /// implies.
    #[error("malformed row from {site}: {reason}")]
    MalformedRow { site: String, reason: String },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or writing an output file failed.
    #[error("output file error: {0}")]
    Io(#[from] std::io::Error),
}
