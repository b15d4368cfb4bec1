//! Device classes reported by search analytics.
//!
//! This module provides the [`Device`] enum for the device breakdown of
//! search statistics. Known classes have dedicated variants; values the
//! API adds later are preserved in [`Device::Other`].
//!
//! # Example
//!
//! ```rust
//! use gsc_types::Device;
//!
//! let desktop = Device::from_api("DESKTOP");
//! assert_eq!(desktop, Device::Desktop);
//! assert_eq!(desktop.label(), "Desktop");
//!
//! let unknown = Device::from_api("SMARTTV");
//! assert_eq!(unknown, Device::Other("Smarttv".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class a search was made from.
///
/// The API reports device classes as uppercase strings (`DESKTOP`,
/// `MOBILE`, `TABLET`); output tables use capitalized labels. Unknown
/// classes keep their normalized label in [`Device::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Device {
    Desktop,
    Mobile,
    Tablet,

    /// Device class not yet known to this crate.
    /// Contains the capitalized form of the raw API value.
    Other(String),
}

impl Device {
    /// Create a Device from the raw API value.
    ///
    /// Matching is case-insensitive. Unknown values are normalized the
    /// same way as known ones: first letter upper-cased, rest lowered.
    pub fn from_api(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "DESKTOP" => Device::Desktop,
            "MOBILE" => Device::Mobile,
            "TABLET" => Device::Tablet,
            _ => Device::Other(capitalize(value)),
        }
    }

    /// Capitalized label for this device class, as written to output.
    pub fn label(&self) -> &str {
        match self {
            Device::Desktop => "Desktop",
            Device::Mobile => "Mobile",
            Device::Tablet => "Tablet",
            Device::Other(s) => s,
        }
    }

    /// Check if this is a known device class (not `Other`).
    pub fn is_known(&self) -> bool {
        !matches!(self, Device::Other(_))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Device {
    fn from(s: &str) -> Self {
        Device::from_api(s)
    }
}

impl From<String> for Device {
    fn from(s: String) -> Self {
        Device::from_api(&s)
    }
}

impl From<Device> for String {
    fn from(device: Device) -> Self {
        device.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_known() {
        assert_eq!(Device::from_api("DESKTOP"), Device::Desktop);
        assert_eq!(Device::from_api("MOBILE"), Device::Mobile);
        assert_eq!(Device::from_api("TABLET"), Device::Tablet);
    }

    #[test]
    fn test_from_api_case_insensitive() {
        assert_eq!(Device::from_api("desktop"), Device::Desktop);
        assert_eq!(Device::from_api("Mobile"), Device::Mobile);
    }

    #[test]
    fn test_from_api_unknown_is_capitalized() {
        let device = Device::from_api("SMARTTV");
        assert_eq!(device, Device::Other("Smarttv".to_string()));
        assert_eq!(device.label(), "Smarttv");
        assert!(!device.is_known());
    }

    #[test]
    fn test_label_round_trip() {
        let devices = vec![
            Device::Desktop,
            Device::Tablet,
            Device::Other("Smarttv".to_string()),
        ];
        for device in devices {
            let recovered = Device::from_api(device.label());
            assert_eq!(device, recovered);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let device = Device::Mobile;
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(json, "\"Mobile\"");

        let recovered: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, Device::Mobile);
    }
}
