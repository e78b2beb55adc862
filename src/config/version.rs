//! WooCommerce API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the WooCommerce REST API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API version.
///
/// The version label becomes the last segment of the resolved API path,
/// e.g. `/wp-json/wc/v3/`. Known versions have dedicated variants; anything
/// else that looks like a path segment is kept as `Custom`, behind a
/// [`VersionLabel`] that can only be built through validation.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// // The default version
/// assert_eq!(ApiVersion::default(), ApiVersion::V2);
///
/// // Parse from string
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
///
/// // An empty label falls back to the default
/// let version: ApiVersion = "".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V3), "v3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version v1.
    V1,
    /// API version v2 (default).
    #[default]
    V2,
    /// API version v3.
    V3,
    /// Custom version label for unrecognized versions.
    Custom(VersionLabel),
}

/// A validated custom version label.
///
/// Labels are non-empty, contain only ASCII letters, digits, `-`, `_` and
/// `.`, and are not made of dots alone, so they always stay a single path
/// segment below the API prefix.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::config::VersionLabel;
///
/// assert_eq!(VersionLabel::new("V4").unwrap().as_str(), "v4");
/// assert!(VersionLabel::new("").is_err());
/// assert!(VersionLabel::new("..").is_err());
/// assert!(VersionLabel::new("../wp-admin").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Creates a validated label, lowercased and trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the label is empty, is
    /// only dots, or contains any other character.
    pub fn new(label: impl AsRef<str>) -> Result<Self, ConfigError> {
        let label = label.as_ref().trim().to_lowercase();
        let valid = !label.is_empty()
            && !label.chars().all(|c| c == '.')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(Self(label))
        } else {
            Err(ConfigError::InvalidApiVersion { version: label })
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ApiVersion {
    /// Returns the version label as used in URL paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Returns `true` for `v1` and `v2`.
    ///
    /// The legacy `wc-api` endpoints of these versions sign requests with the
    /// bare consumer secret, without the trailing `&` delimiter.
    #[must_use]
    pub const fn is_legacy_signing(&self) -> bool {
        matches!(self, Self::V1 | Self::V2)
    }

    /// Builds a custom version from an unrecognized label.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the label fails
    /// [`VersionLabel`] validation.
    pub fn custom(label: impl AsRef<str>) -> Result<Self, ConfigError> {
        VersionLabel::new(label).map(Self::Custom)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "" => Ok(Self::default()),
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Self::custom(s),
        }
    }
}
