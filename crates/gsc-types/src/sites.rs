//! Site identifiers, registry entries, and URL schemes.
//!
//! Entry points that operate on sites accept either a single identifier
//! or a batch; [`SiteList`] normalizes both into an ordered list.
//! [`Scheme`] turns a bare identifier like `en.wikipedia.org` into the
//! canonical property URL the API expects.

use serde::{Deserialize, Serialize};

/// One or many site identifiers, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteList(Vec<String>);

impl SiteList {
    /// Iterate over the identifiers in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of identifiers in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SiteList {
    fn from(site: &str) -> Self {
        SiteList(vec![site.to_string()])
    }
}

impl From<String> for SiteList {
    fn from(site: String) -> Self {
        SiteList(vec![site])
    }
}

impl From<Vec<String>> for SiteList {
    fn from(sites: Vec<String>) -> Self {
        SiteList(sites)
    }
}

impl From<Vec<&str>> for SiteList {
    fn from(sites: Vec<&str>) -> Self {
        SiteList(sites.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for SiteList {
    fn from(sites: &[&str]) -> Self {
        SiteList(sites.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a> IntoIterator for &'a SiteList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A property entry from the site registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    /// Canonical property URL.
    pub site_url: String,

    /// Permission the authorized user holds on the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
}

/// URL scheme used to canonicalize bare site identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    /// Scheme prefix including the separator.
    pub fn prefix(&self) -> &'static str {
        match self {
            Scheme::Https => "https://",
            Scheme::Http => "http://",
        }
    }

    /// Canonical property URL for a bare site identifier
    /// (`en.wikipedia.org` becomes `https://en.wikipedia.org/`).
    pub fn canonical_url(&self, site: &str) -> String {
        format!("{}{}/", self.prefix(), site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_site_becomes_singleton() {
        let sites = SiteList::from("en.wikipedia.org");
        assert_eq!(sites.len(), 1);
        assert_eq!(sites.iter().next().map(String::as_str), Some("en.wikipedia.org"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let sites = SiteList::from(vec!["b.example", "a.example", "c.example"]);
        let order: Vec<&str> = sites.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["b.example", "a.example", "c.example"]);
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            Scheme::Https.canonical_url("en.wikipedia.org"),
            "https://en.wikipedia.org/"
        );
        assert_eq!(
            Scheme::Http.canonical_url("en.wikipedia.org"),
            "http://en.wikipedia.org/"
        );
    }

    #[test]
    fn test_site_entry_deserialization() {
        let json = r#"{"siteUrl": "https://en.wikipedia.org/", "permissionLevel": "siteFullUser"}"#;
        let entry: SiteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.site_url, "https://en.wikipedia.org/");
        assert_eq!(entry.permission_level.as_deref(), Some("siteFullUser"));

        let bare: SiteEntry = serde_json::from_str(r#"{"siteUrl": "sc-domain:example.org"}"#).unwrap();
        assert_eq!(bare.permission_level, None);
    }
}
