//! REST client implementation for the WooCommerce API.
//!
//! This module provides the [`RestClient`] type with one method per
//! supported operation, each a thin wrapper over [`HttpClient`].

use serde::Serialize;

use crate::auth::{Credentials, ParameterSet};
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, ResponseBody};
use crate::config::{ClientOptions, DeleteVerb, StoreUrl};

/// Stand-in payload type for requests without a body.
const NO_BODY: Option<&()> = None;

/// REST API client for a WooCommerce store.
///
/// Provides `get`, `post`, `put`, `delete` and `options` methods. Successful
/// calls return the unread [`ResponseBody`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::RestClient;
///
/// let client = RestClient::new("https://shop.example.com", "ck_1234", "cs_5678", None)?;
///
/// // GET request
/// let orders: serde_json::Value = client.get("orders", None).await?.json().await?;
///
/// // POST request with body
/// let body = serde_json::json!({"name": "Premium Quality", "regular_price": "21.99"});
/// let created = client.post("products", &body).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the store at `store_url`.
    ///
    /// Options default to [`ClientOptions::default`] when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the URL is malformed or not
    /// `http`/`https`, if the key or secret is empty, or if the transport
    /// cannot be initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{ApiVersion, ClientOptions, RestClient};
    ///
    /// let options = ClientOptions::builder().version(ApiVersion::V3).build();
    /// let client = RestClient::new("https://shop.example.com", "ck_1", "cs_1", Some(options)).unwrap();
    /// assert_eq!(client.http_client().api_path(), "/wp-json/wc/v3/");
    /// ```
    pub fn new(
        store_url: &str,
        consumer_key: &str,
        consumer_secret: &str,
        options: Option<ClientOptions>,
    ) -> Result<Self, RestError> {
        let store_url = StoreUrl::new(store_url)?;
        let credentials = Credentials::new(consumer_key, consumer_secret)?;
        Self::with_credentials(store_url, credentials, options.unwrap_or_default())
    }

    /// Creates a new REST client from already validated parts.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the transport cannot be initialized.
    pub fn with_credentials(
        store_url: StoreUrl,
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::new(store_url, credentials, options)?;
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a POST request with a JSON payload and no query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for encoding, transport or status errors.
    pub async fn post<T>(&self, endpoint: &str, payload: &T) -> Result<ResponseBody, RestError>
    where
        T: Serialize + ?Sized,
    {
        self.make_request(HttpMethod::Post, endpoint, None, Some(payload))
            .await
    }

    /// Sends a PUT request with a JSON payload and no query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for encoding, transport or status errors.
    pub async fn put<T>(&self, endpoint: &str, payload: &T) -> Result<ResponseBody, RestError>
    where
        T: Serialize + ?Sized,
    {
        self.make_request(HttpMethod::Put, endpoint, None, Some(payload))
            .await
    }

    /// Sends a GET request with optional query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport or status errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params: ParameterSet = [("status", "processing")].into_iter().collect();
    /// let body = client.get("orders", Some(params)).await?;
    /// ```
    pub async fn get(
        &self,
        endpoint: &str,
        params: Option<ParameterSet>,
    ) -> Result<ResponseBody, RestError> {
        self.make_request(HttpMethod::Get, endpoint, params, NO_BODY)
            .await
    }

    /// Sends a delete request with optional query parameters.
    ///
    /// By default this is sent as **POST**, matching what existing
    /// deployments of this client send. Configure
    /// [`DeleteVerb::Delete`] to send a real DELETE.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport or status errors.
    pub async fn delete(
        &self,
        endpoint: &str,
        params: Option<ParameterSet>,
    ) -> Result<ResponseBody, RestError> {
        let method = match self.http_client.options().delete_verb() {
            DeleteVerb::Post => HttpMethod::Post,
            DeleteVerb::Delete => HttpMethod::Delete,
        };
        self.make_request(method, endpoint, params, NO_BODY).await
    }

    /// Sends an OPTIONS request with no parameters and no payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for transport or status errors.
    pub async fn options(&self, endpoint: &str) -> Result<ResponseBody, RestError> {
        self.make_request(HttpMethod::Options, endpoint, None, NO_BODY)
            .await
    }

    /// Sends a request with a method given by name.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] wrapping
    /// [`HttpError::UnsupportedMethod`](crate::HttpError::UnsupportedMethod)
    /// if `method` is not recognized, without any network call.
    pub async fn request<T>(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<ParameterSet>,
        payload: Option<&T>,
    ) -> Result<ResponseBody, RestError>
    where
        T: Serialize + ?Sized,
    {
        Ok(self
            .http_client
            .request(method, endpoint, params, payload)
            .await?)
    }

    /// Internal helper to send requests.
    async fn make_request<T>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        params: Option<ParameterSet>,
        payload: Option<&T>,
    ) -> Result<ResponseBody, RestError>
    where
        T: Serialize + ?Sized,
    {
        Ok(self
            .http_client
            .send(method, endpoint, params, payload)
            .await?)
    }
}
