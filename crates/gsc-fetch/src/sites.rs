//! Site registry operations.

use serde_json::Value;

use gsc_client::SearchConsole;
use gsc_types::SiteList;

use crate::error::FetchError;

/// List the properties registered to the authorized account, sorted
/// ascending by URL.
pub async fn list<C: SearchConsole>(console: &C) -> Result<Vec<String>, FetchError> {
    let entries = console.list_sites().await?;
    let mut urls: Vec<String> = entries.into_iter().map(|entry| entry.site_url).collect();
    urls.sort();
    tracing::debug!("Registry lists {} sites", urls.len());
    Ok(urls)
}

/// Add every site to the registry, one call per site.
///
/// `sites` holds full property URLs, not bare identifiers. The
/// acknowledgements come back in input order and the first failure
/// aborts the batch.
pub async fn add<C: SearchConsole>(
    console: &C,
    sites: &SiteList,
) -> Result<Vec<Value>, FetchError> {
    let mut acks = Vec::with_capacity(sites.len());
    for site in sites {
        acks.push(console.add_site(site).await?);
        tracing::info!("Added {} to the site registry", site);
    }
    Ok(acks)
}

/// Remove every site from the registry, one call per site.
pub async fn remove<C: SearchConsole>(
    console: &C,
    sites: &SiteList,
) -> Result<Vec<Value>, FetchError> {
    let mut acks = Vec::with_capacity(sites.len());
    for site in sites {
        acks.push(console.delete_site(site).await?);
        tracing::info!("Removed {} from the site registry", site);
    }
    Ok(acks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_client::{ClientError, MockConsole, SiteEntry};

    fn entry(url: &str) -> SiteEntry {
        SiteEntry {
            site_url: url.to_string(),
            permission_level: Some("siteOwner".to_string()),
        }
    }

    #[tokio::test]
    async fn test_list_sorts_ascending() {
        let console = MockConsole::new().with_site_entries(vec![
            entry("https://b.example.com/"),
            entry("https://a.example.com/"),
        ]);

        let urls = list(&console).await.unwrap();
        assert_eq!(urls, vec!["https://a.example.com/", "https://b.example.com/"]);
    }

    #[tokio::test]
    async fn test_add_acknowledges_in_input_order() {
        let console = MockConsole::new();
        let sites = vec!["https://b.example.com/", "https://a.example.com/"].into();

        let acks = add(&console, &sites).await.unwrap();
        assert_eq!(acks.len(), 2);
        assert_eq!(acks[0]["siteUrl"], "https://b.example.com/");
        assert_eq!(acks[1]["siteUrl"], "https://a.example.com/");
    }

    #[tokio::test]
    async fn test_remove_single_site_from_str() {
        let console = MockConsole::new();
        let sites = SiteList::from("https://a.example.com/");

        let acks = remove(&console, &sites).await.unwrap();
        assert_eq!(acks.len(), 1);
    }

    #[tokio::test]
    async fn test_add_stops_on_first_failure() {
        let console = MockConsole::new().with_failing_site("https://a.example.com/");
        let sites = vec!["https://a.example.com/", "https://b.example.com/"].into();

        let err = add(&console, &sites).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Client(ClientError::Api { status: 403, .. })
        ));
    }
}
