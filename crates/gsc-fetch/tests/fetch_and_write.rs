//! End-to-end tests for the fetch-and-append pipeline, from a mocked
//! console down to the bytes on disk.

use gsc_client::{MockConsole, QueryResponse};
use gsc_fetch::output::{append_stats, stats_filename, write_sitelist};
use gsc_fetch::{fetch_stats, sites, StatsQuery};
use gsc_types::{SiteEntry, SplitBy};
use serde_json::json;

fn console() -> MockConsole {
    MockConsole::new()
        .with_response(
            "https://en.wikipedia.org/",
            response(json!([
                {
                    "keys": ["2024-01-02", "deu"],
                    "clicks": 5.0, "impressions": 50.0, "ctr": 0.1, "position": 8.0
                },
                {
                    "keys": ["2024-01-01", "usa"],
                    "clicks": 20.0, "impressions": 200.0, "ctr": 0.1, "position": 4.25
                }
            ])),
        )
        .with_response(
            "https://de.wikipedia.org/",
            response(json!([
                {
                    "keys": ["2024-01-01", "deu"],
                    "clicks": 30.0, "impressions": 300.0, "ctr": 0.1, "position": 2.5
                }
            ])),
        )
}

fn response(rows: serde_json::Value) -> QueryResponse {
    serde_json::from_value(json!({ "rows": rows })).unwrap()
}

#[tokio::test]
async fn fetched_stats_append_to_one_csv_per_split() {
    let query = StatsQuery::new(
        vec!["en.wikipedia.org", "de.wikipedia.org"].into(),
        "2024-01-01".parse().unwrap(),
        "2024-01-07".parse().unwrap(),
    )
    .with_split(SplitBy::Country);

    let table = fetch_stats(&console(), &query).await.unwrap();
    assert_eq!(table.len(), 3);

    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(stats_filename(query.split_by, query.rich_results_only));
    assert!(path.ends_with("country-all.csv"));

    append_stats(&table, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "site,date,country,clicks,impressions,ctr,position\n\
         https://de.wikipedia.org/,2024-01-01,DEU,30,300,0.1000,2.5000\n\
         https://en.wikipedia.org/,2024-01-01,USA,20,200,0.1000,4.2500\n\
         https://en.wikipedia.org/,2024-01-02,DEU,5,50,0.1000,8.0000\n"
    );

    // A second fetch appends below the existing rows without a new header.
    append_stats(&table, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 7);
    assert_eq!(
        contents.matches("site,date,country,clicks,impressions,ctr,position").count(),
        1
    );
}

#[tokio::test]
async fn registry_listing_lands_in_a_sitelist_csv() {
    let console = MockConsole::new().with_site_entries(vec![
        SiteEntry {
            site_url: "https://en.wikipedia.org/".to_string(),
            permission_level: Some("siteOwner".to_string()),
        },
        SiteEntry {
            site_url: "https://de.wikipedia.org/".to_string(),
            permission_level: Some("siteFullUser".to_string()),
        },
    ]);

    let urls = sites::list(&console).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitelist.csv");
    write_sitelist(&urls, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "siteUrl\nhttps://de.wikipedia.org/\nhttps://en.wikipedia.org/\n"
    );
}
