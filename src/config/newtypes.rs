//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated WooCommerce consumer key.
///
/// This newtype ensures the consumer key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerKey;
///
/// let key = ConsumerKey::new("ck_1234").unwrap();
/// assert_eq!(key.as_ref(), "ck_1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerKey(String);

impl ConsumerKey {
    /// Creates a new validated consumer key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyConsumerKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ConsumerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated WooCommerce consumer secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ConsumerSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::ConsumerSecret;
///
/// let secret = ConsumerSecret::new("cs_5678").unwrap();
/// assert_eq!(format!("{:?}", secret), "ConsumerSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerSecret(String);

impl ConsumerSecret {
    /// Creates a new validated consumer secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyConsumerSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ConsumerSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ConsumerSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConsumerSecret(*****)")
    }
}

/// A validated store base URL.
///
/// Only absolute `http` and `https` URLs are accepted. The scheme decides how
/// requests are authenticated: `https` stores receive inline credentials,
/// `http` stores receive OAuth1-signed requests.
///
/// Any query string or fragment on the input is dropped, since the client
/// appends endpoints and its own query string to this URL.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://shop.example.com").unwrap();
/// assert!(url.is_secure());
/// assert_eq!(url.host_name(), Some("shop.example.com"));
///
/// let url = url.with_api_path("/wp-json/wc/v2/");
/// assert_eq!(url.as_ref(), "https://shop.example.com/wp-json/wc/v2/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl(Url);

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL cannot be parsed,
    /// has no host, or uses a scheme other than `http` or `https`.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = || ConfigError::InvalidStoreUrl {
            url: raw.to_string(),
        };

        let mut parsed = Url::parse(raw).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        parsed.set_query(None);
        parsed.set_fragment(None);
        Ok(Self(parsed))
    }

    /// Returns a copy of this URL with its path replaced by `path`.
    #[must_use]
    pub fn with_api_path(&self, path: &str) -> Self {
        let mut url = self.0.clone();
        url.set_path(path);
        Self(url)
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns `true` when the store is reached over TLS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.scheme() == "https"
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for StoreUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_key_rejects_empty_string() {
        let result = ConsumerKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
    }

    #[test]
    fn test_consumer_secret_rejects_empty_string() {
        let result = ConsumerSecret::new("");
        assert!(matches!(result, Err(ConfigError::EmptyConsumerSecret)));
    }

    #[test]
    fn test_consumer_secret_masks_value_in_debug() {
        let secret = ConsumerSecret::new("cs_super_secret").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ConsumerSecret(*****)");
        assert!(!debug_output.contains("cs_super_secret"));
    }

    #[test]
    fn test_store_url_accepts_http_and_https() {
        let url = StoreUrl::new("https://shop.example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert!(url.is_secure());

        let url = StoreUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert!(!url.is_secure());
        assert_eq!(url.host_name(), Some("localhost"));
    }

    #[test]
    fn test_store_url_rejects_invalid() {
        // No scheme
        assert!(StoreUrl::new("shop.example.com").is_err());

        // Empty host
        assert!(StoreUrl::new("https://").is_err());

        // Unsupported scheme
        assert!(StoreUrl::new("ftp://shop.example.com").is_err());

        // Garbage
        assert!(matches!(
            StoreUrl::new("::not a url::"),
            Err(ConfigError::InvalidStoreUrl { url }) if url == "::not a url::"
        ));
    }

    #[test]
    fn test_store_url_drops_query_and_fragment() {
        let url = StoreUrl::new("https://shop.example.com/?lang=en#top").unwrap();
        assert_eq!(url.as_ref(), "https://shop.example.com/");
    }

    #[test]
    fn test_with_api_path_overwrites_existing_path() {
        let url = StoreUrl::new("http://shop.example.com/blog/").unwrap();
        let api = url.with_api_path("/wc-api/v3/");
        assert_eq!(api.path(), "/wc-api/v3/");
        assert_eq!(api.as_ref(), "http://shop.example.com/wc-api/v3/");
        // Source URL unchanged
        assert_eq!(url.path(), "/blog/");
    }

    #[test]
    fn test_store_url_deserializes_with_validation() {
        let url: StoreUrl = serde_json::from_str(r#""https://shop.example.com""#).unwrap();
        assert_eq!(url.host_name(), Some("shop.example.com"));

        let result: Result<StoreUrl, _> = serde_json::from_str(r#""gopher://x""#);
        assert!(result.is_err());
    }
}
