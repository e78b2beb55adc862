//! Request authentication for the WooCommerce REST API.
//!
//! WooCommerce accepts two mutually exclusive authentication strategies, and
//! the store URL scheme decides which one a request uses:
//!
//! - **`https` stores**: [`QueryStringAuthenticator`] sends the consumer key
//!   and secret as plain credentials (query string or Basic auth header).
//! - **`http` stores**: [`oauth::OAuth1Signer`] signs every request with a
//!   one-legged OAuth1 HMAC-SHA256 signature, so the secret never travels
//!   over the unencrypted connection.
//!
//! Both implement the [`Authenticator`] trait. [`authenticator_for`] picks
//! one per request.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::auth::{authenticator_for, Authenticator};
//! use woocommerce_api::{ClientOptions, Credentials, HttpMethod, ParameterSet, StoreUrl};
//!
//! let credentials = Credentials::new("ck_1234", "cs_5678").unwrap();
//! let options = ClientOptions::default();
//! let store = StoreUrl::new("https://shop.example.com").unwrap();
//!
//! let authenticator = authenticator_for(&store, &credentials, &options);
//! let signed = authenticator.authenticate(
//!     HttpMethod::Get,
//!     "https://shop.example.com/wp-json/wc/v2/orders",
//!     ParameterSet::new(),
//! );
//! assert!(signed.query().contains("consumer_key=ck_1234"));
//! ```

mod credentials;
pub mod oauth;
mod params;
mod query_auth;

pub use credentials::Credentials;
pub use oauth::OAuth1Signer;
pub use params::ParameterSet;
pub use query_auth::QueryStringAuthenticator;

use std::fmt;

use crate::clients::HttpMethod;
use crate::config::{ClientOptions, StoreUrl};

/// A request whose authentication has been resolved.
///
/// Holds the target URL (without query string), the final URL-encoded query
/// string, and, in header mode, the credentials for the `Authorization`
/// header.
///
/// # Security
///
/// In inline-credential mode the query string contains the consumer secret,
/// so the `Debug` implementation omits it.
#[derive(Clone)]
pub struct SignedRequest {
    method: HttpMethod,
    url: String,
    query: String,
    basic_auth: Option<Credentials>,
}

impl SignedRequest {
    /// Creates a signed request.
    #[must_use]
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        query: impl Into<String>,
        basic_auth: Option<Credentials>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            query: query.into(),
            basic_auth,
        }
    }

    /// Returns the HTTP method the request was authenticated for.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the target URL without query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the authenticated, URL-encoded query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns credentials to send as HTTP Basic auth, if any.
    #[must_use]
    pub const fn basic_auth(&self) -> Option<&Credentials> {
        self.basic_auth.as_ref()
    }

    /// Returns `url?query`.
    #[must_use]
    pub fn full_url(&self) -> String {
        format!("{}?{}", self.url, self.query)
    }
}

impl fmt::Debug for SignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &"<redacted>")
            .field("basic_auth", &self.basic_auth)
            .finish()
    }
}

/// A strategy that authenticates one request.
///
/// Implementations borrow the client's immutable credentials and options;
/// they hold no state of their own between requests.
pub trait Authenticator {
    /// Short label used in logs (`query_string`, `header`, `oauth1`).
    fn name(&self) -> &'static str;

    /// Adds authentication to `params` and returns the resulting request.
    ///
    /// `url` is the full target URL without query string.
    fn authenticate(&self, method: HttpMethod, url: &str, params: ParameterSet)
        -> SignedRequest;
}

/// Selects the authenticator for a store by its URL scheme.
///
/// `https` stores get [`QueryStringAuthenticator`]; `http` stores get
/// [`OAuth1Signer`].
#[must_use]
pub fn authenticator_for<'a>(
    store_url: &StoreUrl,
    credentials: &'a Credentials,
    options: &'a ClientOptions,
) -> Box<dyn Authenticator + 'a> {
    if store_url.is_secure() {
        Box::new(QueryStringAuthenticator::new(
            credentials,
            options.query_auth(),
        ))
    } else {
        Box::new(OAuth1Signer::new(credentials, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("ck_test", "cs_test").unwrap()
    }

    #[test]
    fn test_https_store_uses_inline_credentials() {
        let credentials = credentials();
        let options = ClientOptions::default();
        let store = StoreUrl::new("https://shop.example.com").unwrap();

        let authenticator = authenticator_for(&store, &credentials, &options);
        assert_eq!(authenticator.name(), "query_string");

        let signed = authenticator.authenticate(
            HttpMethod::Get,
            "https://shop.example.com/wp-json/wc/v2/products",
            ParameterSet::new(),
        );
        assert!(signed.query().contains("consumer_key=ck_test"));
        assert!(signed.query().contains("consumer_secret=cs_test"));
        assert!(!signed.query().contains("oauth_"));
    }

    #[test]
    fn test_http_store_uses_oauth1() {
        let credentials = credentials();
        let options = ClientOptions::default();
        let store = StoreUrl::new("http://shop.example.com").unwrap();

        let authenticator = authenticator_for(&store, &credentials, &options);
        assert_eq!(authenticator.name(), "oauth1");

        let signed = authenticator.authenticate(
            HttpMethod::Get,
            "http://shop.example.com/wp-json/wc/v2/products",
            ParameterSet::new(),
        );
        assert!(signed.query().contains("oauth_signature="));
        assert!(!signed.query().contains("consumer_secret"));
        assert!(!signed.query().contains("cs_test"));
    }

    #[test]
    fn test_signed_request_debug_redacts_query() {
        let signed = SignedRequest::new(
            HttpMethod::Get,
            "https://shop.example.com/wp-json/wc/v2/orders",
            "consumer_key=ck&consumer_secret=cs_hidden",
            None,
        );
        let debug = format!("{signed:?}");
        assert!(!debug.contains("cs_hidden"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_full_url_joins_query() {
        let signed = SignedRequest::new(HttpMethod::Get, "http://x/a", "b=1", None);
        assert_eq!(signed.full_url(), "http://x/a?b=1");
    }
}
