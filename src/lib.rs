//! # WooCommerce API Rust Client
//!
//! A Rust client for the WooCommerce REST API, providing type-safe
//! configuration, request authentication and an async HTTP dispatcher.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientOptions`] and [`ClientOptionsBuilder`]
//! - Validated newtypes for credentials and the store URL
//! - Inline-credential authentication for `https` stores
//! - One-legged OAuth1 (HMAC-SHA256) request signing for `http` stores via [`auth::oauth`]
//! - An async request dispatcher with configurable status classification
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{ApiVersion, ClientOptions, RestClient};
//!
//! let options = ClientOptions::builder()
//!     .version(ApiVersion::V3)
//!     .build();
//!
//! let client = RestClient::new(
//!     "https://shop.example.com",
//!     "ck_your_consumer_key",
//!     "cs_your_consumer_secret",
//!     Some(options),
//! )
//! .unwrap();
//!
//! assert_eq!(client.http_client().api_path(), "/wp-json/wc/v3/");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use woocommerce_api::{ParameterSet, RestClient};
//!
//! let client = RestClient::new("https://shop.example.com", "ck_...", "cs_...", None)?;
//!
//! // GET with query parameters
//! let params: ParameterSet = [("status", "processing")].into_iter().collect();
//! let orders: serde_json::Value = client.get("orders", Some(params)).await?.json().await?;
//!
//! // POST with a JSON payload
//! let product = serde_json::json!({"name": "Premium Quality", "type": "simple"});
//! let created = client.post("products", &product).await?;
//! println!("Created with status {}", created.status());
//! ```
//!
//! ## Authentication
//!
//! The store URL scheme selects the strategy:
//!
//! - `https://`: `consumer_key`/`consumer_secret` in the query string
//!   (or a Basic auth header with [`QueryAuthMode::Header`])
//! - `http://`: OAuth1 signature with `oauth_consumer_key`, `oauth_nonce`,
//!   `oauth_timestamp`, `oauth_signature_method` and `oauth_signature`
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials and options are owned by the client
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Every failure is returned to the caller

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Authenticator, Credentials, ParameterSet, SignedRequest};
pub use config::{
    ApiVersion, ClientOptions, ClientOptionsBuilder, ConsumerKey, ConsumerSecret, DeleteVerb,
    QueryAuthMode, StoreUrl, VersionLabel,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpStatusError, ResponseBody, RestClient, RestError,
    StatusPolicy, UnsupportedMethodError,
};
