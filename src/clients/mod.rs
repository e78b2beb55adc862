//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the request dispatcher and the types around it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Authenticates, sends and classifies one request at a time
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE, OPTIONS)
//! - [`StatusPolicy`]: Which status codes count as failures
//! - [`ResponseBody`]: The unread body of a successful response
//! - [`HttpError`]: Request failure taxonomy
//! - [`rest::RestClient`]: The caller-facing client with one method per operation
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::RestClient;
//!
//! let client = RestClient::new("http://shop.example.com", "ck_1234", "cs_5678", None)?;
//!
//! // http store: the request is OAuth1-signed
//! let body = client.get("orders", None).await?;
//! println!("{}", body.text().await?);
//! ```
//!
//! # Status Classification
//!
//! By default only 400, 401, 404 and 500 are failures; every other status
//! is handed back as a [`ResponseBody`]. See [`StatusPolicy`] to change that.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod status;

pub use errors::{HttpError, HttpStatusError, UnsupportedMethodError};
pub use http_client::{HttpClient, SDK_VERSION, USER_AGENT};
pub use http_request::HttpMethod;
pub use http_response::ResponseBody;
pub use status::StatusPolicy;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
