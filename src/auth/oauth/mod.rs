//! OAuth1 request signing for stores served over plain `http`.
//!
//! WooCommerce refuses inline credentials on unencrypted connections and
//! expects one-legged OAuth1 instead: no request token or access token, just
//! the consumer key/secret pair, a nonce, a timestamp, and an HMAC-SHA256
//! signature over the request.
//!
//! # Overview
//!
//! - [`OAuth1Signer`]: The [`Authenticator`](crate::auth::Authenticator) for `http` stores
//! - [`generate_nonce`]: Per-request nonce generation
//! - [`canonical_parameter_string`], [`signature_base_string`], [`signing_key`]:
//!   The individual signing steps, exposed for verification
//! - [`hmac`]: HMAC-SHA256 and SHA-1 helpers

pub mod hmac;
mod nonce;
mod signer;

pub use nonce::{generate_nonce, NONCE_BYTES};
pub use signer::{
    canonical_parameter_string, signature_base_string, signing_key, OAuth1Signer,
    SIGNATURE_METHOD,
};
