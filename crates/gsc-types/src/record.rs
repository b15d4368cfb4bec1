//! Normalized search-statistics rows and tables.
//!
//! This module provides [`StatsRecord`], one normalized row of search
//! statistics, and [`StatsTable`], a collection of rows fetched under a
//! single split. Tables are sorted at construction into the order rows
//! are written out in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Device, SplitBy};

/// One normalized row of search statistics.
///
/// `country` and `device` are populated according to the split the row
/// was fetched with; counts are integers even though the API reports
/// them as floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Canonical URL of the property the row belongs to.
    pub site: String,

    /// Report date.
    pub date: NaiveDate,

    /// ISO 3166-1 alpha-3 country code, uppercased.
    pub country: Option<String>,

    /// Device class the searches were made from.
    pub device: Option<Device>,

    /// Number of clicks.
    pub clicks: i64,

    /// Number of impressions.
    pub impressions: i64,

    /// Click-through rate.
    pub ctr: f64,

    /// Average position in the search results.
    pub position: f64,
}

impl StatsRecord {
    fn sort_key(&self) -> (&str, NaiveDate, Option<&str>, Option<&str>) {
        (
            self.site.as_str(),
            self.date,
            self.country.as_deref(),
            self.device.as_ref().map(Device::label),
        )
    }
}

/// Statistics rows normalized under a single split.
///
/// Construction sorts the rows ascending by site, date, country and
/// device label. The sort is stable, so rows that compare equal keep
/// the order the API returned them in.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    split_by: SplitBy,
    records: Vec<StatsRecord>,
}

impl StatsTable {
    /// Build a table, sorting the rows into output order.
    pub fn new(split_by: SplitBy, mut records: Vec<StatsRecord>) -> Self {
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { split_by, records }
    }

    /// The split this table was fetched with.
    pub fn split_by(&self) -> SplitBy {
        self.split_by
    }

    /// Column layout for this table.
    pub fn columns(&self) -> &'static [&'static str] {
        self.split_by.columns()
    }

    /// The sorted rows.
    pub fn records(&self) -> &[StatsRecord] {
        &self.records
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, date: &str) -> StatsRecord {
        StatsRecord {
            site: site.to_string(),
            date: date.parse().unwrap(),
            country: None,
            device: None,
            clicks: 10,
            impressions: 100,
            ctr: 0.1,
            position: 3.5,
        }
    }

    #[test]
    fn test_sorted_by_site_then_date() {
        let table = StatsTable::new(
            SplitBy::None,
            vec![
                record("https://b.example/", "2024-01-02"),
                record("https://a.example/", "2024-01-02"),
                record("https://b.example/", "2024-01-01"),
                record("https://a.example/", "2024-01-01"),
            ],
        );

        let order: Vec<(&str, String)> = table
            .records()
            .iter()
            .map(|r| (r.site.as_str(), r.date.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("https://a.example/", "2024-01-01".to_string()),
                ("https://a.example/", "2024-01-02".to_string()),
                ("https://b.example/", "2024-01-01".to_string()),
                ("https://b.example/", "2024-01-02".to_string()),
            ]
        );
    }

    #[test]
    fn test_sorted_by_country_and_device() {
        let mut usa_mobile = record("https://a.example/", "2024-01-01");
        usa_mobile.country = Some("USA".to_string());
        usa_mobile.device = Some(Device::Mobile);

        let mut usa_desktop = record("https://a.example/", "2024-01-01");
        usa_desktop.country = Some("USA".to_string());
        usa_desktop.device = Some(Device::Desktop);

        let mut deu_tablet = record("https://a.example/", "2024-01-01");
        deu_tablet.country = Some("DEU".to_string());
        deu_tablet.device = Some(Device::Tablet);

        let table = StatsTable::new(
            SplitBy::CountryDevice,
            vec![usa_mobile.clone(), usa_desktop.clone(), deu_tablet.clone()],
        );
        assert_eq!(
            table.records(),
            &[deu_tablet, usa_desktop, usa_mobile]
        );
    }

    #[test]
    fn test_columns_follow_split() {
        let table = StatsTable::new(SplitBy::Device, vec![]);
        assert_eq!(
            table.columns(),
            &["site", "date", "device", "clicks", "impressions", "ctr", "position"]
        );
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
