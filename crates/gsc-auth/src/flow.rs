//! Interactive authorization and token refresh.
//!
//! The consent flow follows the installed-application pattern: build a
//! consent URL, let the user authorize in a browser, collect the
//! verification code, exchange it at the token endpoint. The one
//! user-facing step is abstracted behind [`VerificationPrompt`], so the
//! whole flow can run in tests with a canned code.

use chrono::{Duration, Utc};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use url::Url;

use crate::credentials::{ClientConfig, ClientSecrets};
use crate::{AuthError, Credentials, Transport};

/// Redirect target that makes the provider display the verification
/// code for copying instead of redirecting anywhere.
const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

/// Authorization scope to request.
///
/// Reading statistics and listing sites needs [`AccessScope::ReadOnly`];
/// adding or removing sites needs [`AccessScope::Full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    ReadOnly,
    Full,
}

impl AccessScope {
    /// The scope URL sent with the consent request.
    pub fn url(&self) -> &'static str {
        match self {
            AccessScope::ReadOnly => "https://www.googleapis.com/auth/webmasters.readonly",
            AccessScope::Full => "https://www.googleapis.com/auth/webmasters",
        }
    }
}

impl FromStr for AccessScope {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "readonly" => Ok(AccessScope::ReadOnly),
            "full" => Ok(AccessScope::Full),
            other => Err(AuthError::InvalidScope(other.to_string())),
        }
    }
}

/// User-facing step of the consent flow.
///
/// Implementations present the consent URL and block until the user
/// supplies the verification code.
pub trait VerificationPrompt {
    /// Present `auth_url` to the user and return the verification code.
    fn verification_code(&self, auth_url: &str) -> Result<String, AuthError>;
}

/// Prompt on stdout/stdin.
pub struct StdinPrompt;

impl VerificationPrompt for StdinPrompt {
    fn verification_code(&self, auth_url: &str) -> Result<String, AuthError> {
        use std::io::Write;

        println!("Go to the following link in your browser:\n\n    {auth_url}\n");
        print!("Enter verification code: ");
        std::io::stdout().flush()?;

        let mut code = String::new();
        std::io::stdin().read_line(&mut code)?;
        Ok(code.trim().to_string())
    }
}

/// Token endpoint response for both code exchange and refresh.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Run the interactive consent flow and return an authorized transport.
///
/// Reads the client secrets at `secrets_path`, presents the consent URL
/// through `prompt`, exchanges the returned verification code at the
/// token endpoint, and wraps the resulting bundle in a [`Transport`].
/// The caller decides whether to persist the bundle with
/// [`crate::save`].
pub async fn authorize(
    secrets_path: &Path,
    scope: AccessScope,
    prompt: &dyn VerificationPrompt,
) -> Result<Transport, AuthError> {
    let secrets = ClientSecrets::read_from(secrets_path)?;
    let config = secrets.installed;

    let auth_url = consent_url(&config, scope)?;
    let code = prompt.verification_code(auth_url.as_str())?;

    let http = reqwest::Client::new();
    let params = [
        ("code", code.as_str()),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("redirect_uri", OOB_REDIRECT_URI),
        ("grant_type", "authorization_code"),
    ];
    let token = post_token_request(&http, &config.token_uri, &params).await?;
    tracing::debug!("Exchanged verification code at {}", config.token_uri);

    let credentials = Credentials {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        client_id: config.client_id,
        client_secret: config.client_secret,
        token_uri: config.token_uri,
        scopes: vec![scope.url().to_string()],
        expiry: token
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs)),
    };
    Ok(Transport::new(credentials))
}

/// Mint a fresh access token using the bundle's refresh token.
///
/// Returns the refreshed bundle; the refresh token is carried over when
/// the endpoint does not issue a new one. Fails with
/// [`AuthError::Expired`] if the bundle has no refresh token.
pub async fn refresh(credentials: &Credentials) -> Result<Credentials, AuthError> {
    let refresh_token = credentials
        .refresh_token
        .as_deref()
        .ok_or(AuthError::Expired)?;

    let http = reqwest::Client::new();
    let params = [
        ("refresh_token", refresh_token),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "refresh_token"),
    ];
    let token = post_token_request(&http, &credentials.token_uri, &params).await?;
    tracing::debug!("Refreshed access token at {}", credentials.token_uri);

    Ok(Credentials {
        access_token: token.access_token,
        refresh_token: token
            .refresh_token
            .or_else(|| credentials.refresh_token.clone()),
        expiry: token
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs)),
        ..credentials.clone()
    })
}

fn consent_url(config: &ClientConfig, scope: AccessScope) -> Result<Url, AuthError> {
    let mut url =
        Url::parse(&config.auth_uri).map_err(|e| AuthError::InvalidEndpoint(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", OOB_REDIRECT_URI)
        .append_pair("scope", scope.url())
        .append_pair("access_type", "offline");
    Ok(url)
}

async fn post_token_request(
    http: &reqwest::Client,
    token_uri: &str,
    params: &[(&str, &str)],
) -> Result<TokenResponse, AuthError> {
    let response = http.post(token_uri).form(params).send().await?;
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AuthError::TokenEndpoint {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}
