//! Credential bundles and their on-disk representation.
//!
//! Credentials are stored as a single JSON document holding the access
//! token, the refresh token when one was granted, and enough of the
//! client configuration to refresh later without re-reading the secrets
//! file. Client secrets use the layout the API console produces when
//! downloading installed-application credentials.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AuthError;

/// Leeway subtracted from the recorded expiry when deciding staleness,
/// so a token is not presented moments before it lapses.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// An OAuth2 credential bundle for an installed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token attached to API requests.
    pub access_token: String,

    /// Long-lived token used to mint new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// OAuth2 client identifier.
    pub client_id: String,

    /// OAuth2 client secret.
    pub client_secret: String,

    /// Endpoint that exchanges and refreshes tokens.
    pub token_uri: String,

    /// Scopes the bundle was authorized for.
    #[serde(default)]
    pub scopes: Vec<String>,

    /// When the access token stops being accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Whether the access token is expired or about to be.
    ///
    /// A bundle without a recorded expiry is treated as current; the API
    /// rejects the token if that turns out wrong.
    pub fn is_expired(&self) -> bool {
        match self.expiry {
            Some(expiry) => Utc::now() + Duration::seconds(EXPIRY_LEEWAY_SECS) >= expiry,
            None => false,
        }
    }

    /// Read a bundle from a JSON file.
    pub fn read_from(path: &Path) -> Result<Self, AuthError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the bundle to a JSON file, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Installed-application client secrets, as downloaded from the API console.
///
/// The interesting fields are nested under an `installed` key; `web`
/// appears for web applications and is accepted as an alias.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    #[serde(alias = "web")]
    pub installed: ClientConfig,
}

/// The client configuration inside a secrets document.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
}

impl ClientSecrets {
    /// Read a secrets document from a JSON file.
    pub fn read_from(path: &Path) -> Result<Self, AuthError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_credentials() -> Credentials {
        Credentials {
            access_token: "ya29.sample".to_string(),
            refresh_token: Some("1//refresh".to_string()),
            client_id: "client-id.apps.googleusercontent.com".to_string(),
            client_secret: "shhh".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            scopes: vec!["https://www.googleapis.com/auth/webmasters.readonly".to_string()],
            expiry: None,
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let credentials = sample_credentials();
        credentials.write_to(&path).unwrap();
        let recovered = Credentials::read_from(&path).unwrap();
        assert_eq!(recovered, credentials);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Credentials::read_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AuthError::Io(_))));
    }

    #[test]
    fn test_read_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Credentials::read_from(&path);
        assert!(matches!(result, Err(AuthError::Malformed(_))));
    }

    #[test]
    fn test_is_expired() {
        let mut credentials = sample_credentials();
        assert!(!credentials.is_expired());

        credentials.expiry = Some(Utc::now() + Duration::hours(1));
        assert!(!credentials.is_expired());

        credentials.expiry = Some(Utc::now() - Duration::hours(1));
        assert!(credentials.is_expired());

        // Within the leeway window counts as expired.
        credentials.expiry = Some(Utc::now() + Duration::seconds(30));
        assert!(credentials.is_expired());
    }

    #[test]
    fn test_client_secrets_parse() {
        let json = r#"{
            "installed": {
                "client_id": "abc.apps.googleusercontent.com",
                "client_secret": "xyz",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://oauth2.googleapis.com/token",
                "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
            }
        }"#;
        let secrets: ClientSecrets = serde_json::from_str(json).unwrap();
        assert_eq!(secrets.installed.client_id, "abc.apps.googleusercontent.com");
        assert_eq!(
            secrets.installed.token_uri,
            "https://oauth2.googleapis.com/token"
        );
    }

    #[test]
    fn test_client_secrets_web_alias() {
        let json = r#"{
            "web": {
                "client_id": "abc",
                "client_secret": "xyz",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://oauth2.googleapis.com/token"
            }
        }"#;
        let secrets: ClientSecrets = serde_json::from_str(json).unwrap();
        assert_eq!(secrets.installed.client_id, "abc");
    }
}
