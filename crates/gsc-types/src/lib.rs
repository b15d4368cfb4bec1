//! gsc-types: Shared data structures for the Search Console toolkit
//!
//! This crate defines the types shared across the workspace including:
//! - [`SplitBy`] - Requested statistics breakdown, with its query dimensions
//!   and column layout
//! - [`Device`] - Device classes with an `Other` variant for new values
//! - [`StatsRecord`] / [`StatsTable`] - Normalized, sorted statistics rows
//! - [`SiteList`] - One-or-many site identifiers
//!
//! # Example
//!
//! ```rust
//! use gsc_types::{Scheme, SiteList, SplitBy};
//!
//! let sites = SiteList::from("en.wikipedia.org");
//! assert_eq!(sites.len(), 1);
//!
//! let split: SplitBy = "country-device".parse().unwrap();
//! assert_eq!(split.filename_stem(), "country-device");
//!
//! assert_eq!(
//!     Scheme::Https.canonical_url("en.wikipedia.org"),
//!     "https://en.wikipedia.org/"
//! );
//! ```

mod device;
mod error;
mod record;
mod sites;
mod split;

pub use device::Device;
pub use error::TypeError;
pub use record::{StatsRecord, StatsTable};
pub use sites::{Scheme, SiteEntry, SiteList};
pub use split::{Dimension, SplitBy};
