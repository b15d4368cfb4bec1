//! HTTP client for the Search Console API.
//!
//! # Design
//!
//! The client is a thin wrapper over an authorized [`Transport`]:
//! - Client struct with the transport + `base_url`
//! - Property URLs embedded in endpoint paths as single percent-encoded
//!   segments, the way the API addresses sites
//! - Non-success statuses mapped to [`ClientError::Api`] with the
//!   server's own message pulled from its error envelope
//! - Error propagation via `?`
//!
//! The base URL is overridable so the whole client can be exercised
//! against a local mock server.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use gsc_auth::Transport;
use gsc_types::SiteEntry;

use crate::error::ClientError;
use crate::query::{QueryRequest, QueryResponse};
use crate::SearchConsole;

/// Base URL of the webmasters v3 API.
const API_BASE_URL: &str = "https://www.googleapis.com/webmasters/v3";

/// Client for the Search Console (webmasters v3) API.
pub struct SearchConsoleClient {
    transport: Transport,
    base_url: Url,
}

impl SearchConsoleClient {
    /// Create a client against the production API.
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            base_url: Url::parse(API_BASE_URL).expect("API base URL is valid"),
        }
    }

    /// Create a client against a different base URL (for tests).
    pub fn with_base_url(transport: Transport, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Endpoint for a site-scoped resource. The property URL travels as
    /// one path segment, so its slashes are percent-encoded.
    fn site_endpoint(&self, site_url: &str, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().expect("API base URL has a path");
            segments.pop_if_empty().push("sites").push(site_url);
            for part in tail {
                segments.push(part);
            }
        }
        url
    }

    /// Endpoint for the site registry collection.
    fn sites_endpoint(&self) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("API base URL has a path")
            .pop_if_empty()
            .push("sites");
        url
    }

    /// Check the response status, returning the body on success and the
    /// API's error message otherwise.
    async fn check_status(response: reqwest::Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(body)
    }

    /// Decode a success body as JSON, mapping empty bodies (204s from
    /// registry writes) to `Null`.
    async fn read_json_or_null(response: reqwest::Response) -> Result<Value, ClientError> {
        let body = Self::check_status(response).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

/// Wire shape of the registry listing. `siteEntry` is absent entirely
/// when the user has no sites.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SitesResponse {
    #[serde(default)]
    site_entry: Vec<SiteEntry>,
}

impl SearchConsole for SearchConsoleClient {
    async fn query(
        &self,
        site_url: &str,
        request: &QueryRequest,
    ) -> Result<QueryResponse, ClientError> {
        let url = self.site_endpoint(site_url, &["searchAnalytics", "query"]);
        tracing::debug!("Querying search analytics for {}", site_url);

        let response = self
            .transport
            .http()
            .post(url)
            .bearer_auth(self.transport.access_token())
            .json(request)
            .send()
            .await?;
        let body = Self::check_status(response).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }

    async fn list_sites(&self) -> Result<Vec<SiteEntry>, ClientError> {
        let url = self.sites_endpoint();
        tracing::debug!("Listing registered sites");

        let response = self
            .transport
            .http()
            .get(url)
            .bearer_auth(self.transport.access_token())
            .send()
            .await?;
        let body = Self::check_status(response).await?;
        let parsed: SitesResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        Ok(parsed.site_entry)
    }

    async fn add_site(&self, site_url: &str) -> Result<Value, ClientError> {
        let url = self.site_endpoint(site_url, &[]);
        tracing::debug!("Adding {} to the site registry", site_url);

        let response = self
            .transport
            .http()
            .put(url)
            .bearer_auth(self.transport.access_token())
            .send()
            .await?;
        Self::read_json_or_null(response).await
    }

    async fn delete_site(&self, site_url: &str) -> Result<Value, ClientError> {
        let url = self.site_endpoint(site_url, &[]);
        tracing::debug!("Removing {} from the site registry", site_url);

        let response = self
            .transport
            .http()
            .delete(url)
            .bearer_auth(self.transport.access_token())
            .send()
            .await?;
        Self::read_json_or_null(response).await
    }
}

/// Pull the human-readable message out of the API's error envelope,
/// falling back to the raw body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}
