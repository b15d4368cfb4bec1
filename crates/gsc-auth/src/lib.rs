//! # gsc-auth
//!
//! OAuth2 credential handling for the Search Console toolkit.
//!
//! This crate covers the whole credential lifecycle for an installed
//! application:
//!
//! - [`authorize`] runs the interactive consent flow against a client
//!   secrets file and returns an authorized [`Transport`].
//! - [`save`] persists the transport's bundle as JSON.
//! - [`load`] reads a bundle back, refreshing the access token up front
//!   when it has expired and a refresh token is present.
//!
//! ## Design Principles
//!
//! - **One suspension point**: the only interactive step is the
//!   verification-code prompt, abstracted behind [`VerificationPrompt`]
//!   so the flow is testable with a canned code.
//! - **Immutable transport**: expiry is handled at load time, never
//!   mid-flight, so the transport carries no locks or interior
//!   mutability.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gsc_auth::AuthError> {
//!     // One-time interactive setup:
//!     let transport = gsc_auth::authorize(
//!         Path::new("client_secrets.json"),
//!         gsc_auth::AccessScope::ReadOnly,
//!         &gsc_auth::StdinPrompt,
//!     )
//!     .await?;
//!     gsc_auth::save(&transport, Path::new("credentials.json"))?;
//!
//!     // Later invocations:
//!     let transport = gsc_auth::load(Path::new("credentials.json")).await?;
//!     println!("authorized as {}", transport.credentials().client_id);
//!     Ok(())
//! }
//! ```

mod credentials;
pub mod error;
mod flow;
mod store;
mod transport;

pub use credentials::{ClientConfig, ClientSecrets, Credentials};
pub use error::AuthError;
pub use flow::{authorize, refresh, AccessScope, StdinPrompt, VerificationPrompt};
pub use store::{load, save};
pub use transport::Transport;
