//! Shopify API version handling.
//!
//! Shopify names REST API versions after their release quarter (`2025-10`)
//! plus the rolling `unstable` version. The credential set carries the
//! version as a plain string; [`ApiVersion`] validates it when a session is
//! built.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A validated Shopify API version.
///
/// # Example
///
/// ```rust
/// use shopify_api_helpers::ApiVersion;
///
/// let version: ApiVersion = "2025-10".parse().unwrap();
/// assert_eq!(version.to_string(), "2025-10");
/// assert!(version.is_stable());
///
/// let unstable: ApiVersion = "unstable".parse().unwrap();
/// assert!(!unstable.is_stable());
///
/// assert!("2025-02".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A quarterly release, stored as (year, month).
    Stable {
        /// Release year.
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The rolling unstable version.
    Unstable,
}

impl ApiVersion {
    /// The version used by this crate's own examples and tests.
    pub const LATEST: Self = Self::Stable {
        year: 2025,
        month: 10,
    };

    /// Returns `true` for quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Returns the URL path segment for this version, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn admin_path(&self) -> String {
        format!("/admin/api/{self}")
    }

    fn parse_stable(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let year: u16 = year.parse().ok()?;
        let month: u8 = month.parse().ok()?;

        // Shopify releases quarterly
        matches!(month, 1 | 4 | 7 | 10).then_some(Self::Stable { year, month })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        Self::parse_stable(&s).ok_or(ConfigError::InvalidApiVersion { version: s })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_quarterly_releases() {
        assert_eq!(
            "2021-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::Stable {
                year: 2021,
                month: 10
            }
        );
        assert_eq!("2025-10".parse::<ApiVersion>().unwrap(), ApiVersion::LATEST);
        assert_eq!(
            " Unstable ".parse::<ApiVersion>().unwrap(),
            ApiVersion::Unstable
        );
    }

    #[test]
    fn test_api_version_display_round_trips() {
        for raw in ["2021-01", "2024-04", "2025-07", "2025-10", "unstable"] {
            assert_eq!(raw.parse::<ApiVersion>().unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2024".parse::<ApiVersion>().is_err());
        assert!("2024-1".parse::<ApiVersion>().is_err());
        assert!("2024-02".parse::<ApiVersion>().is_err()); // not a release month
        assert!("24-01".parse::<ApiVersion>().is_err());
        assert!("2021-10-mock".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_admin_path() {
        assert_eq!(ApiVersion::LATEST.admin_path(), "/admin/api/2025-10");
        assert_eq!(ApiVersion::Unstable.admin_path(), "/admin/api/unstable");
    }

    #[test]
    fn test_version_ordering() {
        let older: ApiVersion = "2024-10".parse().unwrap();
        let newer: ApiVersion = "2025-01".parse().unwrap();
        assert!(older < newer);
        assert!(newer < ApiVersion::Unstable);
    }
}
