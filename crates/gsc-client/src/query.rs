//! Wire types for the search-analytics query protocol.
//!
//! One [`QueryRequest`] body is built per fetch and shared across all
//! queried sites. The response's `rows` member is absent entirely when
//! a query matches no data, so it stays an `Option` here instead of
//! defaulting to an empty vector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gsc_types::{Dimension, SplitBy};

/// Maximum rows the API returns for a single query.
pub const ROW_LIMIT: u32 = 25_000;

/// Filter expression selecting rich-result search appearances.
const RICH_RESULT_EXPRESSION: &str = "RICHCARD";

/// Body of a search-analytics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// First report date (inclusive).
    pub start_date: NaiveDate,

    /// Last report date (inclusive).
    pub end_date: NaiveDate,

    /// Cap on returned rows; always the API maximum.
    pub row_limit: u32,

    /// Dimensions to break the report down by, in request order.
    pub dimensions: Vec<Dimension>,

    /// Filter groups restricting the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter_groups: Option<Vec<FilterGroup>>,
}

impl QueryRequest {
    /// Build a query for a date range with the daily dimension only.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            row_limit: ROW_LIMIT,
            dimensions: SplitBy::None.dimensions().to_vec(),
            dimension_filter_groups: None,
        }
    }

    /// Request the dimensions for `split` (builder pattern).
    pub fn split_by(mut self, split: SplitBy) -> Self {
        self.dimensions = split.dimensions().to_vec();
        self
    }

    /// Restrict the report to rich-result appearances (builder pattern).
    pub fn rich_results_only(mut self) -> Self {
        self.dimension_filter_groups = Some(vec![FilterGroup {
            filters: vec![Filter {
                dimension: Dimension::SearchAppearance,
                expression: RICH_RESULT_EXPRESSION.to_string(),
            }],
        }]);
        self
    }
}

/// A group of filters that must all match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

/// A single dimension filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub dimension: Dimension,
    pub expression: String,
}

/// Response to a search-analytics query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Result rows; absent entirely when the query matched no data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<ApiRow>>,

    /// How the API aggregated the report (`byProperty` or `byPage`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_aggregation_type: Option<String>,
}

/// One row of a query response.
///
/// `keys` holds the dimension values in request order, date first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRow {
    /// Dimension values for this row.
    #[serde(default)]
    pub keys: Vec<String>,

    /// Click count. The API reports counts as floats with a zero
    /// fractional part; they are decoded straight to integers.
    #[serde(deserialize_with = "deserialize_count")]
    pub clicks: i64,

    /// Impression count.
    #[serde(deserialize_with = "deserialize_count")]
    pub impressions: i64,

    /// Click-through rate.
    pub ctr: f64,

    /// Average position in the results.
    pub position: f64,
}

/// Decode a count that may arrive as an integer, a float with a zero
/// fractional part, or a numeric string.
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => Ok(n),
        RawCount::Float(f) => Ok(f as i64),
        RawCount::Text(s) => s
            .parse::<i64>()
            .or_else(|_| s.parse::<f64>().map(|f| f as i64))
            .map_err(|_| serde::de::Error::custom(format!("invalid count: {s:?}"))),
    }
}
