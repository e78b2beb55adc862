//! Error types for the WooCommerce API client.
//!
//! This module contains the error type used for configuration and validation
//! errors raised while constructing a client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Nothing is checked lazily at request time.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConsumerKey, ConfigError};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key.")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret.")]
    EmptyConsumerSecret,

    /// Store URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid store URL '{url}'. Expected an absolute http or https URL (e.g., 'https://shop.example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a version label such as 'v2' or 'v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Query authentication mode label is not recognized.
    #[error("Invalid query auth mode '{mode}'. Expected 'query_string' or 'header'.")]
    InvalidQueryAuthMode {
        /// The unrecognized label.
        mode: String,
    },

    /// The underlying HTTP transport could not be built.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Description of the transport builder failure.
        reason: String,
    },
}
