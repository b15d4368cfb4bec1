//! Mock Search Console for testing.
//!
//! `MockConsole` implements `SearchConsole` with configurable responses,
//! allowing the fetch and registry layers to be tested without network
//! calls.
//!
//! # Usage
//!
//! ```rust
//! use gsc_client::{MockConsole, QueryRequest, QueryResponse, SearchConsole};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockConsole::new()
//!         .with_response("https://en.wikipedia.org/", QueryResponse::default());
//!
//!     let request = QueryRequest::new(
//!         "2024-01-01".parse().unwrap(),
//!         "2024-01-07".parse().unwrap(),
//!     );
//!     let response = mock
//!         .query("https://en.wikipedia.org/", &request)
//!         .await
//!         .unwrap();
//!     assert!(response.rows.is_none());
//! }
//! ```

use std::collections::HashMap;

use serde_json::{json, Value};

use gsc_types::SiteEntry;

use crate::error::ClientError;
use crate::query::{QueryRequest, QueryResponse};
use crate::SearchConsole;

/// Mock console for testing.
///
/// Stores canned responses keyed by property URL, using the builder
/// pattern for setup. Properties without a configured response answer
/// with no rows, the same way the API reports an empty result.
#[derive(Default, Clone)]
pub struct MockConsole {
    /// Canned query responses by property URL.
    pub responses: HashMap<String, QueryResponse>,

    /// Property URLs whose operations fail with a forced API error.
    pub failing_sites: Vec<String>,

    /// Entries returned from `list_sites`.
    pub site_entries: Vec<SiteEntry>,
}

impl MockConsole {
    /// Create a new empty mock console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query response for one property (builder pattern).
    pub fn with_response(mut self, site_url: &str, response: QueryResponse) -> Self {
        self.responses.insert(site_url.to_string(), response);
        self
    }

    /// Force operations on one property to fail (builder pattern).
    pub fn with_failing_site(mut self, site_url: &str) -> Self {
        self.failing_sites.push(site_url.to_string());
        self
    }

    /// Set the registry entries returned from `list_sites` (builder pattern).
    pub fn with_site_entries(mut self, entries: Vec<SiteEntry>) -> Self {
        self.site_entries = entries;
        self
    }

    fn check_not_failing(&self, site_url: &str) -> Result<(), ClientError> {
        if self.failing_sites.iter().any(|s| s == site_url) {
            return Err(ClientError::Api {
                status: 403,
                message: format!("User does not have sufficient permission for site '{site_url}'."),
            });
        }
        Ok(())
    }
}

impl SearchConsole for MockConsole {
    async fn query(
        &self,
        site_url: &str,
        _request: &QueryRequest,
    ) -> Result<QueryResponse, ClientError> {
        self.check_not_failing(site_url)?;
        Ok(self.responses.get(site_url).cloned().unwrap_or_default())
    }

    async fn list_sites(&self) -> Result<Vec<SiteEntry>, ClientError> {
        Ok(self.site_entries.clone())
    }

    async fn add_site(&self, site_url: &str) -> Result<Value, ClientError> {
        self.check_not_failing(site_url)?;
        Ok(json!({ "siteUrl": site_url }))
    }

    async fn delete_site(&self, site_url: &str) -> Result<Value, ClientError> {
        self.check_not_failing(site_url)?;
        Ok(json!({ "siteUrl": site_url }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> QueryRequest {
        QueryRequest::new("2024-01-01".parse().unwrap(), "2024-01-07".parse().unwrap())
    }

    #[tokio::test]
    async fn test_unconfigured_site_answers_with_no_rows() {
        let mock = MockConsole::new();
        let response = mock
            .query("https://nowhere.example/", &request())
            .await
            .unwrap();
        assert!(response.rows.is_none());
    }

    #[tokio::test]
    async fn test_failing_site_errors() {
        let mock = MockConsole::new().with_failing_site("https://denied.example/");
        let result = mock.query("https://denied.example/", &request()).await;
        assert!(matches!(result, Err(ClientError::Api { status: 403, .. })));
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let mock = MockConsole::new();
        let sites = mock.list_sites().await.unwrap();
        assert!(sites.is_empty());
    }
}
