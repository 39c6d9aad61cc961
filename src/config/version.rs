//! Storefront API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Storefront API endpoint the helper should call.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Storefront API version.
///
/// Shopify releases new API versions quarterly (January, April, July,
/// October) and deprecates old ones on a rolling window, so the version is an
/// explicit configuration field rather than a compiled-in constant. This enum
/// provides variants for the versions this helper has been validated against,
/// plus an `Unstable` variant for development and a `Custom` variant for
/// newer versions.
///
/// # Example
///
/// ```rust
/// use shopify_ga4_events::ApiVersion;
///
/// // Use the latest validated version
/// let version = ApiVersion::latest();
/// assert!(version.is_stable());
///
/// // Parse from string
/// let version: ApiVersion = "2021-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2021_10);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V2022_07), "2022-07");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2021-10 (October 2021)
    V2021_10,
    /// API version 2022-07 (July 2022)
    V2022_07,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest API version this helper has been validated against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2022_07
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for `Unstable` and `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns a numeric ordering value for version comparison.
    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2021_10 => 1,
            Self::V2022_07 => 2,
            Self::Unstable => 100,  // Always sorts after stable versions
            Self::Custom(_) => 101, // Custom sorts after unstable
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // Format: YYYY-MM
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Quarterly release months only
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            // Custom versions compare lexicographically with each other
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2021_10 => "2021-10",
            Self::V2022_07 => "2022-07",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2021-10" => Ok(Self::V2021_10),
            "2022-07" => Ok(Self::V2022_07),
            "unstable" => Ok(Self::Unstable),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
