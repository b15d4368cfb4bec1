//! Multi-site statistics fetching and normalization.

use chrono::NaiveDate;

use gsc_client::{ApiRow, QueryRequest, SearchConsole};
use gsc_types::{Device, Scheme, SiteList, SplitBy, StatsRecord, StatsTable};

use crate::error::FetchError;

/// Configuration for one statistics fetch.
///
/// # Example
///
/// ```rust
/// use gsc_fetch::StatsQuery;
/// use gsc_types::SplitBy;
///
/// let query = StatsQuery::new(
///     vec!["en.wikipedia.org", "de.wikipedia.org"].into(),
///     "2024-01-01".parse().unwrap(),
///     "2024-01-31".parse().unwrap(),
/// )
/// .with_split(SplitBy::Country)
/// .with_rich_results(true);
/// ```
#[derive(Debug, Clone)]
pub struct StatsQuery {
    /// Bare site identifiers to query, without scheme or trailing slash.
    pub sites: SiteList,
    /// First report date (inclusive).
    pub start_date: NaiveDate,
    /// Last report date (inclusive).
    pub end_date: NaiveDate,
    /// Breakdown to request on top of the daily totals.
    pub split_by: SplitBy,
    /// Scheme used to canonicalize the bare identifiers.
    pub scheme: Scheme,
    /// Whether to restrict the report to rich result appearances.
    pub rich_results_only: bool,
}

impl StatsQuery {
    /// Create a query for daily totals over a date range.
    pub fn new(sites: SiteList, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            sites,
            start_date,
            end_date,
            split_by: SplitBy::None,
            scheme: Scheme::Https,
            rich_results_only: false,
        }
    }

    /// Set the requested breakdown.
    pub fn with_split(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }

    /// Canonicalize site identifiers with a different scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Restrict the report to rich result appearances.
    pub fn with_rich_results(mut self, rich_results_only: bool) -> Self {
        self.rich_results_only = rich_results_only;
        self
    }

    /// The request body shared by every per-site call.
    fn request_body(&self) -> QueryRequest {
        let mut request =
            QueryRequest::new(self.start_date, self.end_date).split_by(self.split_by);
        if self.rich_results_only {
            request = request.rich_results_only();
        }
        request
    }
}

/// Fetch statistics for every site in the query, one site at a time.
///
/// All sites share one request body. A site whose report contains no
/// data logs a warning and contributes zero rows, while any API
/// failure aborts the whole fetch. Each surviving row is tagged with
/// the property URL it came from, and the merged rows come back as one
/// sorted table.
pub async fn fetch_stats<C: SearchConsole>(
    console: &C,
    query: &StatsQuery,
) -> Result<StatsTable, FetchError> {
    let request = query.request_body();
    let mut records = Vec::new();

    for site in &query.sites {
        let site_url = query.scheme.canonical_url(site);
        let response = console.query(&site_url, &request).await?;

        let Some(rows) = response.rows else {
            tracing::warn!("No data returned by the API for {}", site_url);
            continue;
        };

        tracing::debug!("Received {} rows for {}", rows.len(), site_url);
        for row in rows {
            records.push(normalize_row(&site_url, row, query.split_by)?);
        }
    }

    let table = StatsTable::new(query.split_by, records);
    tracing::info!(
        "Fetched {} rows across {} sites ({} to {})",
        table.len(),
        query.sites.len(),
        query.start_date,
        query.end_date
    );
    Ok(table)
}

/// Turn one API row into a normalized record.
///
/// `keys` carries the dimension values in request order: the date
/// first, then country and device when the breakdown asks for them.
fn normalize_row(
    site_url: &str,
    row: ApiRow,
    split_by: SplitBy,
) -> Result<StatsRecord, FetchError> {
    let mut keys = row.keys.iter();

    let date_key = keys
        .next()
        .ok_or_else(|| malformed(site_url, "missing date key".to_string()))?;
    let date: NaiveDate = date_key
        .parse()
        .map_err(|_| malformed(site_url, format!("invalid date key {date_key:?}")))?;

    let country = if split_by.has_country() {
        let raw = keys
            .next()
            .ok_or_else(|| malformed(site_url, "missing country key".to_string()))?;
        Some(raw.to_uppercase())
    } else {
        None
    };

    let device = if split_by.has_device() {
        let raw = keys
            .next()
            .ok_or_else(|| malformed(site_url, "missing device key".to_string()))?;
        Some(Device::from_api(raw))
    } else {
        None
    };

    Ok(StatsRecord {
        site: site_url.to_string(),
        date,
        country,
        device,
        clicks: row.clicks,
        impressions: row.impressions,
        ctr: row.ctr,
        position: row.position,
    })
}

fn malformed(site_url: &str, reason: String) -> FetchError {
    FetchError::MalformedRow {
        site: site_url.to_string(),
        reason,
    }
}
