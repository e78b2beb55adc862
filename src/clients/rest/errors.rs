//! REST-specific error types for the WooCommerce API client.
//!
//! [`RestError`] is the single error type of the [`RestClient`](super::RestClient)
//! surface:
//!
//! - [`RestError::Config`]: Client construction failed
//! - [`RestError::Http`]: A request failed (see [`HttpError`])
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{HttpError, RestError};
//!
//! match client.get("orders/42", None).await {
//!     Ok(body) => println!("Order: {}", body.text().await?),
//!     Err(RestError::Http(HttpError::Status(e))) if e.code == 404 => {
//!         println!("No such order");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The client could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}
