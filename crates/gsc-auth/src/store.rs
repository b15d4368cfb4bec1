//! Loading and saving credential bundles.

use std::path::Path;

use crate::{flow, AuthError, Credentials, Transport};

/// Load credentials from `path` and return an authorized transport.
///
/// An expired bundle with a refresh token is refreshed up front (one
/// token endpoint round-trip) and the refreshed bundle is written back,
/// so the next load starts current. An expired bundle without a refresh
/// token fails with [`AuthError::Expired`]; an absent or malformed file
/// fails outright.
pub async fn load(path: &Path) -> Result<Transport, AuthError> {
    let credentials = Credentials::read_from(path)?;

    if credentials.is_expired() {
        tracing::info!("Access token expired, refreshing");
        let refreshed = flow::refresh(&credentials).await?;
        refreshed.write_to(path)?;
        return Ok(Transport::new(refreshed));
    }

    Ok(Transport::new(credentials))
}

/// Persist the transport's credential bundle to `path`.
pub fn save(transport: &Transport, path: &Path) -> Result<(), AuthError> {
    transport.credentials().write_to(path)
}
