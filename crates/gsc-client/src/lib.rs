//! # gsc-client
//!
//! Search Console API client.
//!
//! This crate provides a [`SearchConsole`] trait abstraction over the
//! webmasters v3 API, with a production HTTP implementation and a mock
//! for tests.
//!
//! ## Design Principles
//!
//! - **Zero-cost async**: Uses native async traits (Rust 1.75+), avoiding
//!   the heap allocations that `async_trait` would require.
//!
//! - **Thin wrapper**: The client carries no policy. Soft-error handling,
//!   normalization, and ordering live in the layer above; this crate only
//!   executes single API calls and decodes their responses.
//!
//! - **Testable**: The [`MockConsole`] implementation allows testing
//!   without network calls, and the production client's base URL can be
//!   pointed at a local server.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gsc_client::{QueryRequest, SearchConsole, SearchConsoleClient};
//! use gsc_types::SplitBy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = gsc_auth::load(std::path::Path::new("credentials.json")).await?;
//!     let console = SearchConsoleClient::new(transport);
//!
//!     let request = QueryRequest::new(
//!         "2024-01-01".parse()?,
//!         "2024-01-31".parse()?,
//!     )
//!     .split_by(SplitBy::Country);
//!
//!     let response = console.query("https://en.wikipedia.org/", &request).await?;
//!     println!("rows: {}", response.rows.map_or(0, |r| r.len()));
//!     Ok(())
//! }
//! ```

mod client;
pub mod error;
mod mock;
mod query;

// Re-export our types
pub use client::SearchConsoleClient;
pub use error::ClientError;
pub use mock::MockConsole;
pub use query::{ApiRow, Filter, FilterGroup, QueryRequest, QueryResponse, ROW_LIMIT};

// Re-export the registry entry type that appears in our public API so
// downstream crates can use it without a direct gsc-types dependency.
pub use gsc_types::SiteEntry;

/// Search Console API abstraction.
///
/// This trait defines the four primitives the toolkit needs. It uses
/// native async syntax (Rust 1.75+) rather than `async_trait` to avoid
/// heap allocations from `Box<dyn Future>`.
///
/// ## Property URLs
///
/// Methods take the property's canonical URL (scheme and trailing
/// slash included, e.g. `https://en.wikipedia.org/`) exactly as the
/// registry stores it.
///
/// ## Implementors
///
/// - [`SearchConsoleClient`]: Production implementation over HTTP
/// - [`MockConsole`]: Test implementation with configurable responses
pub trait SearchConsole: Send + Sync {
    /// Execute a search-analytics query against one property.
    ///
    /// A response with `rows: None` means the query matched no data;
    /// that is a valid outcome, not an error.
    fn query(
        &self,
        site_url: &str,
        request: &QueryRequest,
    ) -> impl std::future::Future<Output = Result<QueryResponse, ClientError>> + Send;

    /// List the properties registered to the authorized user.
    fn list_sites(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<SiteEntry>, ClientError>> + Send;

    /// Add a property to the user's registry.
    ///
    /// Returns the decoded response body, `Null` when the API answers
    /// with an empty one.
    fn add_site(
        &self,
        site_url: &str,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, ClientError>> + Send;

    /// Remove a property from the user's registry.
    fn delete_site(
        &self,
        site_url: &str,
    ) -> impl std::future::Future<Output = Result<serde_json::Value, ClientError>> + Send;
}
