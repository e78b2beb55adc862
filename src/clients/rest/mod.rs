//! REST API client for WooCommerce stores.
//!
//! This module provides the caller-facing client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) dispatcher.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()`, `options()` and raw `request()`
//! - [`RestError`]: Error type for construction and requests
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{ParameterSet, RestClient};
//!
//! let client = RestClient::new("https://shop.example.com", "ck_1234", "cs_5678", None)?;
//!
//! let params: ParameterSet = [("per_page", "20")].into_iter().collect();
//! let products: serde_json::Value = client.get("products", Some(params)).await?.json().await?;
//! ```
//!
//! # Endpoint Paths
//!
//! Endpoints are relative to the resolved API path; leading slashes are
//! stripped, so `/products` and `products` are equivalent.
//!
//! # Delete Requests
//!
//! `delete()` sends POST unless
//! [`DeleteVerb::Delete`](crate::DeleteVerb::Delete) is configured.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
