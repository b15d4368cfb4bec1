//! Split dimensions for search-analytics queries.
//!
//! This module provides [`SplitBy`], the requested breakdown of search
//! statistics, and [`Dimension`], the dimension names the API accepts.
//! The split determines three things at once: the dimensions sent with a
//! query, the column layout of the normalized table, and the stem used
//! when naming output files.
//!
//! # Example
//!
//! ```rust
//! use gsc_types::{Dimension, SplitBy};
//!
//! let split: SplitBy = "country".parse().unwrap();
//! assert_eq!(split.dimensions(), &[Dimension::Date, Dimension::Country]);
//! assert_eq!(
//!     split.columns(),
//!     &["site", "date", "country", "clicks", "impressions", "ctr", "position"]
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypeError;

/// A query dimension understood by the search-analytics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Date,
    Country,
    Device,
    SearchAppearance,
}

/// Requested breakdown of search statistics.
///
/// Daily totals are always reported; the split adds country and/or device
/// breakdowns on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitBy {
    /// Daily totals only.
    None,
    /// Daily totals broken down by country.
    Country,
    /// Daily totals broken down by device class.
    Device,
    /// Daily totals broken down by country and device class.
    CountryDevice,
}

impl SplitBy {
    /// Query dimensions for this split, in request order.
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            SplitBy::None => &[Dimension::Date],
            SplitBy::Country => &[Dimension::Date, Dimension::Country],
            SplitBy::Device => &[Dimension::Date, Dimension::Device],
            SplitBy::CountryDevice => {
                &[Dimension::Date, Dimension::Country, Dimension::Device]
            }
        }
    }

    /// Column layout of the normalized table for this split.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SplitBy::None => &["site", "date", "clicks", "impressions", "ctr", "position"],
            SplitBy::Country => {
                &["site", "date", "country", "clicks", "impressions", "ctr", "position"]
            }
            SplitBy::Device => {
                &["site", "date", "device", "clicks", "impressions", "ctr", "position"]
            }
            SplitBy::CountryDevice => &[
                "site",
                "date",
                "country",
                "device",
                "clicks",
                "impressions",
                "ctr",
                "position",
            ],
        }
    }

    /// Whether rows carry a country column.
    pub fn has_country(&self) -> bool {
        matches!(self, SplitBy::Country | SplitBy::CountryDevice)
    }

    /// Whether rows carry a device column.
    pub fn has_device(&self) -> bool {
        matches!(self, SplitBy::Device | SplitBy::CountryDevice)
    }

    /// Stem used when naming output files (`overall` when not splitting).
    pub fn filename_stem(&self) -> &'static str {
        match self {
            SplitBy::None => "overall",
            _ => self.as_str(),
        }
    }

    /// Canonical textual form (`none`, `country`, `device`, `country-device`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitBy::None => "none",
            SplitBy::Country => "country",
            SplitBy::Device => "device",
            SplitBy::CountryDevice => "country-device",
        }
    }
}

impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SplitBy {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SplitBy::None),
            "country" => Ok(SplitBy::Country),
            "device" => Ok(SplitBy::Device),
            "country-device" => Ok(SplitBy::CountryDevice),
            other => Err(TypeError::InvalidSplit(other.to_string())),
        }
    }
}
