//! Error types for gsc-types.

use thiserror::Error;

/// Errors that can occur when working with types.
#[derive(Debug, Error)]
pub enum TypeError {
    /// Unrecognized split name.
    #[error("invalid split: {0} (expected none, country, device or country-device)")]
    InvalidSplit(String),
}
