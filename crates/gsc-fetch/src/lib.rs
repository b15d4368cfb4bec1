//! High-level fetch operations for the Search Console toolkit.
//!
//! This crate composes [`gsc_client`] calls into the operations the
//! command line exposes:
//!
//! - [`fetch_stats`] queries a batch of sites over one date range and
//!   merges the responses into a sorted [`gsc_types::StatsTable`]
//! - [`sites`] lists, adds, and removes registry entries
//! - [`output`] appends tables to CSV files and writes site listings
//!
//! # Design Principles
//!
//! - **One request body per fetch**: every site in a batch is queried
//!   with the same dates, dimensions, and filters
//! - **Soft on missing data, hard on failure**: a site with an empty
//!   report is logged and skipped; an API error aborts the batch
//! - **Generic over the console**: everything takes any
//!   [`gsc_client::SearchConsole`], so tests run against
//!   [`gsc_client::MockConsole`]

pub mod error;
pub mod output;
pub mod sites;
mod stats;

pub use error::FetchError;
pub use stats::{fetch_stats, StatsQuery};
