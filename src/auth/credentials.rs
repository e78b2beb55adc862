//! Consumer credentials for WooCommerce API authentication.

use crate::config::{ConsumerKey, ConsumerSecret};
use crate::error::ConfigError;

/// The consumer key/secret pair identifying the API caller.
///
/// Both halves are validated non-empty on construction. The secret is masked
/// in `Debug` output and is never logged by this crate.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::Credentials;
///
/// let credentials = Credentials::new("ck_1234", "cs_5678").unwrap();
/// assert_eq!(credentials.consumer_key().as_ref(), "ck_1234");
/// assert!(!format!("{credentials:?}").contains("cs_5678"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
}

impl Credentials {
    /// Creates validated credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyConsumerKey`] or
    /// [`ConfigError::EmptyConsumerSecret`] if either half is empty.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_parts(
            ConsumerKey::new(consumer_key)?,
            ConsumerSecret::new(consumer_secret)?,
        ))
    }

    /// Creates credentials from already validated parts.
    #[must_use]
    pub const fn from_parts(consumer_key: ConsumerKey, consumer_secret: ConsumerSecret) -> Self {
        Self {
            consumer_key,
            consumer_secret,
        }
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }
}
