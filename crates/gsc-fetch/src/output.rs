//! CSV output for statistics tables and site listings.

use std::fs::OpenOptions;
use std::path::Path;

use gsc_types::{SplitBy, StatsTable};

use crate::error::FetchError;

/// Derive the conventional output filename for a fetch, e.g.
/// `overall-all.csv` or `country-device-rich.csv`.
pub fn stats_filename(split_by: SplitBy, rich_results_only: bool) -> String {
    let suffix = if rich_results_only { "rich" } else { "all" };
    format!("{}-{}.csv", split_by.filename_stem(), suffix)
}

/// Append a table to a CSV file.
///
/// The header row is written only when `path` does not exist yet, so
/// repeated fetches accumulate rows in one file. Parent directories
/// are created as needed. Rates and positions are written with four
/// decimal places.
pub fn append_stats(table: &StatsTable, path: &Path) -> Result<(), FetchError> {
    create_parent_dirs(path)?;

    let write_header = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        writer.write_record(table.columns())?;
    }

    for record in table.records() {
        let mut row: Vec<String> = Vec::with_capacity(table.columns().len());
        row.push(record.site.clone());
        row.push(record.date.to_string());
        if let Some(country) = &record.country {
            row.push(country.clone());
        }
        if let Some(device) = &record.device {
            row.push(device.label().to_string());
        }
        row.push(record.clicks.to_string());
        row.push(record.impressions.to_string());
        row.push(format!("{:.4}", record.ctr));
        row.push(format!("{:.4}", record.position));
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a registry listing as a one-column CSV, replacing whatever
/// `path` held before.
pub fn write_sitelist(site_urls: &[String], path: &Path) -> Result<(), FetchError> {
    create_parent_dirs(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["siteUrl"])?;
    for url in site_urls {
        writer.write_record([url.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn create_parent_dirs(path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
