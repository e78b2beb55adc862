//! Configuration types for the WooCommerce API client.
//!
//! This module provides the configuration types used to construct a client
//! and shape every request it sends.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientOptions`]: Immutable client settings (API path, version, TLS, auth mode)
//! - [`ClientOptionsBuilder`]: A builder for constructing [`ClientOptions`] instances
//! - [`ConsumerKey`]: A validated consumer key newtype
//! - [`ConsumerSecret`]: A validated consumer secret newtype with masked debug output
//! - [`StoreUrl`]: A validated `http`/`https` store URL
//! - [`ApiVersion`]: The WooCommerce API version to use
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use woocommerce_api::{ApiVersion, ClientOptions};
//!
//! let options = ClientOptions::builder()
//!     .version(ApiVersion::V3)
//!     .timeout(Duration::from_secs(15))
//!     .build();
//!
//! assert_eq!(options.api_path(), "/wp-json/wc/v3/");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use version::{ApiVersion, VersionLabel};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clients::StatusPolicy;
use crate::error::ConfigError;

/// Path prefix of the WordPress REST API routes.
pub const WP_API_PREFIX: &str = "/wp-json/wc/";

/// Default path prefix of the legacy `wc-api` routes.
pub const LEGACY_API_PREFIX: &str = "/wc-api/";

/// How credentials are attached to requests sent to `https` stores.
///
/// Requests to `http` stores are always OAuth1-signed and ignore this setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryAuthMode {
    /// `consumer_key` and `consumer_secret` are appended to the query string.
    #[default]
    QueryString,
    /// Credentials are sent in an HTTP Basic `Authorization` header.
    Header,
}

impl QueryAuthMode {
    /// Returns the configuration label for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::QueryString => "query_string",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for QueryAuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryAuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "query" | "query_string" => Ok(Self::QueryString),
            "header" | "basic" => Ok(Self::Header),
            other => Err(ConfigError::InvalidQueryAuthMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// HTTP method used by the `delete` operation.
///
/// Existing deployments of this client send deletions as POST requests, so
/// that remains the default. Servers that accept the DELETE verb can opt in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteVerb {
    /// Send deletions as POST.
    #[default]
    Post,
    /// Send deletions as DELETE.
    Delete,
}

/// Immutable settings for a WooCommerce client.
///
/// Options are captured once when the client is constructed and borrowed by
/// the authenticators and the dispatcher for every request.
///
/// # Thread Safety
///
/// `ClientOptions` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::{ApiVersion, ClientOptions};
///
/// let options = ClientOptions::builder()
///     .api(true)
///     .version(ApiVersion::V1)
///     .build();
///
/// assert_eq!(options.api_path(), "/wc-api/v1/");
/// ```
#[derive(Clone, Debug)]
pub struct ClientOptions {
    api: bool,
    api_prefix: String,
    version: ApiVersion,
    timeout: Option<Duration>,
    verify_ssl: bool,
    query_auth: QueryAuthMode,
    oauth_timestamp: Option<DateTime<Utc>>,
    user_agent_prefix: Option<String>,
    delete_verb: DeleteVerb,
    status_policy: StatusPolicy,
}

impl ClientOptions {
    /// Creates a new builder for constructing `ClientOptions`.
    #[must_use]
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::new()
    }

    /// Returns whether the custom (legacy) API prefix is used.
    #[must_use]
    pub const fn api(&self) -> bool {
        self.api
    }

    /// Returns the custom API prefix.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Returns the API version.
    #[must_use]
    pub const fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Returns the credential placement used for `https` stores.
    #[must_use]
    pub const fn query_auth(&self) -> QueryAuthMode {
        self.query_auth
    }

    /// Returns the pinned OAuth timestamp, if configured.
    ///
    /// When `None`, each signed request is stamped with the time it is sent.
    #[must_use]
    pub const fn oauth_timestamp(&self) -> Option<DateTime<Utc>> {
        self.oauth_timestamp
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the method used by the `delete` operation.
    #[must_use]
    pub const fn delete_verb(&self) -> DeleteVerb {
        self.delete_verb
    }

    /// Returns the status classification policy.
    #[must_use]
    pub const fn status_policy(&self) -> &StatusPolicy {
        &self.status_policy
    }

    /// Returns the resolved API path.
    ///
    /// `{api_prefix}{version}/` when the custom API flag is set, otherwise
    /// `/wp-json/wc/{version}/`.
    #[must_use]
    pub fn api_path(&self) -> String {
        let prefix = if self.api {
            self.api_prefix.as_str()
        } else {
            WP_API_PREFIX
        };
        format!("{prefix}{}/", self.version)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptionsBuilder::new().build()
    }
}

// Verify ClientOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientOptions>();
};

/// Builder for constructing [`ClientOptions`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `api`: `false` (use `/wp-json/wc/`)
/// - `api_prefix`: `/wc-api/`
/// - `version`: `v2`
/// - `timeout`: `None`
/// - `verify_ssl`: `true`
/// - `query_auth`: [`QueryAuthMode::QueryString`]
/// - `oauth_timestamp`: `None` (stamp each request at send time)
/// - `user_agent_prefix`: `None`
/// - `delete_verb`: [`DeleteVerb::Post`]
/// - `status_policy`: [`StatusPolicy::legacy`]
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    api: Option<bool>,
    api_prefix: Option<String>,
    version: Option<ApiVersion>,
    timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    query_auth: Option<QueryAuthMode>,
    oauth_timestamp: Option<DateTime<Utc>>,
    user_agent_prefix: Option<String>,
    delete_verb: Option<DeleteVerb>,
    status_policy: Option<StatusPolicy>,
}

impl ClientOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the custom API prefix is used instead of `/wp-json/wc/`.
    #[must_use]
    pub const fn api(mut self, api: bool) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the custom API prefix (only used when `api` is `true`).
    #[must_use]
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Sets how credentials are attached to `https` requests.
    #[must_use]
    pub const fn query_auth(mut self, mode: QueryAuthMode) -> Self {
        self.query_auth = Some(mode);
        self
    }

    /// Pins the OAuth timestamp used by every signed request.
    ///
    /// Only useful for reproducing signatures; servers reject stale
    /// timestamps, so long-lived clients should leave this unset.
    #[must_use]
    pub const fn oauth_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.oauth_timestamp = Some(timestamp);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the method used by the `delete` operation.
    #[must_use]
    pub const fn delete_verb(mut self, verb: DeleteVerb) -> Self {
        self.delete_verb = Some(verb);
        self
    }

    /// Sets the status classification policy.
    #[must_use]
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = Some(policy);
        self
    }

    /// Builds the [`ClientOptions`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> ClientOptions {
        ClientOptions {
            api: self.api.unwrap_or(false),
            api_prefix: self
                .api_prefix
                .unwrap_or_else(|| LEGACY_API_PREFIX.to_string()),
            version: self.version.unwrap_or_default(),
            timeout: self.timeout,
            verify_ssl: self.verify_ssl.unwrap_or(true),
            query_auth: self.query_auth.unwrap_or_default(),
            oauth_timestamp: self.oauth_timestamp,
            user_agent_prefix: self.user_agent_prefix,
            delete_verb: self.delete_verb.unwrap_or_default(),
            status_policy: self.status_policy.unwrap_or_default(),
        }
    }
}
