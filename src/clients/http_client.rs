//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, the request dispatcher that
//! authenticates, sends and classifies every API call.

use std::collections::HashMap;

use serde::Serialize;

use crate::auth::{authenticator_for, Credentials, ParameterSet};
use crate::clients::errors::{HttpError, HttpStatusError};
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ResponseBody;
use crate::config::{ClientOptions, StoreUrl};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identification sent in the `User-Agent` header.
pub const USER_AGENT: &str = "WooCommerce API Client-Rust";

/// HTTP client for making requests to a WooCommerce store.
///
/// The client handles:
/// - Resolving the API path (`/wp-json/wc/{version}/` or `{prefix}{version}/`)
/// - Default headers including User-Agent and JSON content type
/// - Authentication chosen by store scheme (inline credentials or OAuth1)
/// - Status classification through the configured [`StatusPolicy`](crate::StatusPolicy)
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and shares one connection pool across all
/// concurrent requests. It holds no mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{ClientOptions, Credentials, StoreUrl};
/// use woocommerce_api::clients::HttpClient;
///
/// let client = HttpClient::new(
///     StoreUrl::new("https://shop.example.com")?,
///     Credentials::new("ck_1234", "cs_5678")?,
///     ClientOptions::default(),
/// )?;
///
/// let body = client.request("GET", "orders", None, None::<&()>).await?;
/// let orders: serde_json::Value = body.json().await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Store URL with the resolved API path (e.g., `https://shop/wp-json/wc/v2/`).
    store_url: StoreUrl,
    /// Consumer key and secret.
    credentials: Credentials,
    /// Options captured at construction.
    options: ClientOptions,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given store.
    ///
    /// The store URL's path is replaced by the resolved API path. No network
    /// I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be built (e.g., TLS backend initialization failure).
    pub fn new(
        store_url: StoreUrl,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let store_url = store_url.with_api_path(&options.api_path());

        // Build User-Agent header
        let user_agent_prefix = options
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}{USER_AGENT}/{SDK_VERSION}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        if !options.verify_ssl() {
            tracing::warn!(
                "TLS certificate verification is disabled for {}",
                store_url
            );
        }

        // Create reqwest client
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!options.verify_ssl());
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientInit {
            reason: e.to_string(),
        })?;

        tracing::debug!(
            store = %store_url,
            version = %options.version(),
            "WooCommerce client created"
        );

        Ok(Self {
            client,
            store_url,
            credentials,
            options,
            default_headers,
        })
    }

    /// Returns the store URL including the resolved API path.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the resolved API path (e.g., `/wp-json/wc/v2/`).
    #[must_use]
    pub fn api_path(&self) -> &str {
        self.store_url.path()
    }

    /// Returns the options this client was built with.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request whose method is given by name.
    ///
    /// The method is validated first; anything other than GET, POST, PUT,
    /// DELETE or OPTIONS (case-insensitive) fails without touching the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::UnsupportedMethod`] for an unknown method, and
    /// otherwise the errors of [`send`](Self::send).
    pub async fn request<T>(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<ParameterSet>,
        payload: Option<&T>,
    ) -> Result<ResponseBody, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let method: HttpMethod = method.parse()?;
        self.send(method, endpoint, params, payload).await
    }

    /// Sends an authenticated request to `endpoint` (relative to the API path).
    ///
    /// This method handles:
    /// - Payload serialization
    /// - URL construction (`store + api path + endpoint + ? + auth query`)
    /// - Authentication by store scheme
    /// - Status classification
    ///
    /// Leading slashes in `endpoint` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The payload cannot be serialized (`Encoding`)
    /// - A network, TLS or timeout error occurs (`Transport`)
    /// - The status policy classifies the response as failed (`Status`)
    pub async fn send<T>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Option<ParameterSet>,
        payload: Option<&T>,
    ) -> Result<ResponseBody, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let request = self.build_request(method, endpoint, params, payload)?;
        let url = strip_query(request.url());

        let res = self.client.execute(request).await?;

        let code = res.status().as_u16();
        if self.options.status_policy().is_failure(code) {
            let error = HttpStatusError::new(code);
            tracing::warn!(
                %method,
                %url,
                status = code,
                "WooCommerce API request failed: {}",
                error.status_line
            );
            return Err(error.into());
        }

        Ok(ResponseBody::new(res))
    }

    /// Assembles the authenticated request without sending it.
    fn build_request<T>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Option<ParameterSet>,
        payload: Option<&T>,
    ) -> Result<reqwest::Request, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let body = payload.map(serde_json::to_vec).transpose()?;

        let url = format!("{}{}", self.store_url, normalize_endpoint(endpoint));
        let authenticator = authenticator_for(&self.store_url, &self.credentials, &self.options);
        let signed = authenticator.authenticate(method, &url, params.unwrap_or_default());

        tracing::debug!(
            %method,
            %url,
            auth = authenticator.name(),
            "Sending WooCommerce API request"
        );

        let mut req_builder = self.client.request(method.as_reqwest(), signed.full_url());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(credentials) = signed.basic_auth() {
            req_builder = req_builder.basic_auth(
                credentials.consumer_key().as_ref(),
                Some(credentials.consumer_secret().as_ref()),
            );
        }
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        Ok(req_builder.build()?)
    }
}

/// Strips leading slashes; the API path already ends with one.
fn normalize_endpoint(endpoint: &str) -> &str {
    endpoint.trim_start_matches('/')
}

/// Returns the URL without its query string, which may carry credentials.
fn strip_query(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, QueryAuthMode};

    fn create_client(store: &str, options: ClientOptions) -> HttpClient {
        HttpClient::new(
            StoreUrl::new(store).unwrap(),
            Credentials::new("ck_test", "cs_test").unwrap(),
            options,
        )
        .unwrap()
    }

    #[test]
    fn test_default_api_path() {
        let client = create_client("https://shop.example.com", ClientOptions::default());
        assert_eq!(client.api_path(), "/wp-json/wc/v2/");
        assert_eq!(
            client.store_url().as_ref(),
            "https://shop.example.com/wp-json/wc/v2/"
        );
    }

    #[test]
    fn test_custom_api_path_overwrites_store_path() {
        let options = ClientOptions::builder()
            .api(true)
            .api_prefix("/wc-api/")
            .version(ApiVersion::V1)
            .build();
        let client = create_client("http://shop.example.com/some/page", options);
        assert_eq!(client.api_path(), "/wc-api/v1/");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_client("https://shop.example.com", ClientOptions::default());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(user_agent, &format!("WooCommerce API Client-Rust/{SDK_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let options = ClientOptions::builder()
            .user_agent_prefix("MyApp/1.0")
            .build();
        let client = create_client("https://shop.example.com", options);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("WooCommerce API Client-Rust"));
    }

    #[test]
    fn test_json_headers() {
        let client = create_client("https://shop.example.com", ClientOptions::default());
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_builds_without_tls_verification() {
        let options = ClientOptions::builder()
            .verify_ssl(false)
            .timeout(std::time::Duration::from_secs(5))
            .build();
        let client = create_client("https://self-signed.example.com", options);
        assert!(!client.options().verify_ssl());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    fn header_value<'a>(request: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[test]
    fn test_query_string_mode_puts_credentials_in_url() {
        let client = create_client("https://shop.example.com", ClientOptions::default());
        let params: ParameterSet = [("status", "processing")].into_iter().collect();
        let request = client
            .build_request(HttpMethod::Get, "orders", Some(params), None::<&()>)
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://shop.example.com/wp-json/wc/v2/orders?consumer_key=ck_test&consumer_secret=cs_test&status=processing"
        );
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_header_mode_sends_basic_auth_and_clean_query() {
        use base64::prelude::*;

        let options = ClientOptions::builder()
            .query_auth(QueryAuthMode::Header)
            .build();
        let client = create_client("https://shop.example.com", options);
        let params: ParameterSet = [("status", "processing")].into_iter().collect();
        let request = client
            .build_request(HttpMethod::Get, "orders", Some(params), None::<&()>)
            .unwrap();

        let expected = format!("Basic {}", BASE64_STANDARD.encode("ck_test:cs_test"));
        assert_eq!(header_value(&request, "authorization"), Some(expected.as_str()));
        assert_eq!(request.url().query(), Some("status=processing"));
        assert!(!request.url().as_str().contains("consumer_"));
    }

    #[test]
    fn test_header_mode_is_ignored_for_http_stores() {
        let options = ClientOptions::builder()
            .query_auth(QueryAuthMode::Header)
            .build();
        let client = create_client("http://shop.example.com", options);
        let request = client
            .build_request(HttpMethod::Get, "orders", None, None::<&()>)
            .unwrap();

        assert!(request.headers().get("authorization").is_none());
        let query = request.url().query().unwrap_or_default();
        assert!(query.contains("oauth_signature="));
        assert!(!query.contains("consumer_secret"));
    }

    #[test]
    fn test_leading_slash_is_ignored_by_every_entry_point() {
        let client = create_client("https://shop.example.com", ClientOptions::default());
        for endpoint in ["orders/42", "/orders/42", "//orders/42"] {
            let request = client
                .build_request(HttpMethod::Get, endpoint, None, None::<&()>)
                .unwrap();
            assert_eq!(request.url().path(), "/wp-json/wc/v2/orders/42");
        }
    }

    #[test]
    fn test_payload_is_the_only_body() {
        let client = create_client("https://shop.example.com", ClientOptions::default());

        let request = client
            .build_request(HttpMethod::Get, "orders", None, None::<&()>)
            .unwrap();
        assert!(request.body().is_none());

        let payload = serde_json::json!({"status": "completed"});
        let request = client
            .build_request(HttpMethod::Put, "orders/1", None, Some(&payload))
            .unwrap();
        let bytes = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(bytes, br#"{"status":"completed"}"#);
    }

    #[test]
    fn test_strip_query_hides_credentials() {
        let url = reqwest::Url::parse("https://shop.example.com/wp-json/wc/v2/orders?consumer_secret=cs").unwrap();
        assert_eq!(strip_query(&url), "https://shop.example.com/wp-json/wc/v2/orders");
    }
}
