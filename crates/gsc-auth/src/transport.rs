//! Authorized HTTP transport.

use crate::Credentials;

/// An HTTP client bound to a credential bundle.
///
/// The transport is immutable once constructed: refreshing happens when
/// credentials are loaded, not mid-flight, so sharing one needs no
/// locks. A token that lapses mid-run surfaces as the API's own 401.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    credentials: Credentials,
}

impl Transport {
    /// Wrap a credential bundle with a fresh HTTP client.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// The HTTP client requests are made with.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Bearer token to attach to API requests.
    pub fn access_token(&self) -> &str {
        &self.credentials.access_token
    }

    /// The credential bundle backing this transport.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
