//! HTTP method type for the WooCommerce API client.

use std::fmt;
use std::str::FromStr;

use crate::clients::errors::UnsupportedMethodError;

/// HTTP methods supported by the WooCommerce REST API client.
///
/// Parsing any other method name fails with [`UnsupportedMethodError`]
/// before a request is built.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::HttpMethod;
///
/// let method: HttpMethod = "get".parse().unwrap();
/// assert_eq!(method, HttpMethod::Get);
/// assert_eq!(method.to_string(), "GET");
///
/// assert!("PATCH".parse::<HttpMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
    /// HTTP OPTIONS method for describing an endpoint.
    Options,
}

impl HttpMethod {
    /// Returns the upper-case method name, as used on the wire and in
    /// OAuth1 signature base strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        }
    }

    /// Converts to the transport's method type.
    #[must_use]
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = UnsupportedMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(UnsupportedMethodError {
                method: s.to_string(),
            }),
        }
    }
}
