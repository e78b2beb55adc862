//! HMAC and digest helpers for OAuth1 request signing.
//!
//! This module provides the HMAC-SHA256 signature computation used for the
//! `oauth_signature` parameter, and the SHA-1 digest used to derive
//! `oauth_nonce` values from random bytes.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::auth::oauth::hmac::compute_signature_base64;
//!
//! // Base64-encoded signature, as sent in oauth_signature
//! let signature = compute_signature_base64(b"GET&http%3A%2F%2Fshop&a%3D1", "secret&");
//! assert_eq!(signature.len(), 44); // Base64 of 32 bytes
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha1::{Digest, Sha1};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(message: &[u8], key: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Computes an HMAC-SHA256 signature, returned as standard base64.
///
/// This is the encoding of the `oauth_signature` parameter. The message is
/// taken as raw bytes and the key is the signing key (consumer secret plus
/// optional `&` delimiter).
///
/// # Example
///
/// ```rust
/// use woocommerce_api::auth::oauth::hmac::compute_signature_base64;
///
/// let sig = compute_signature_base64(b"message", "key");
/// assert_eq!(sig, "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=");
/// ```
#[must_use]
pub fn compute_signature_base64(message: &[u8], key: &str) -> String {
    BASE64_STANDARD.encode(hmac_sha256(message, key))
}

/// Returns the lowercase hex SHA-1 digest of `bytes`.
#[must_use]
pub fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

// Internal hex encoding since we don't want to add another dependency
mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_signature_base64_matches_known_value() {
        // HMAC-SHA256("message", "key")
        let sig = compute_signature_base64(b"message", "key");
        assert_eq!(sig, "bp7ym3X//Ft6uuUn1Y/a2y/kLnIZARl2kXNDBl9Y7Uo=");
        assert_eq!(
            hex::encode(hmac_sha256(b"message", "key")),
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_compute_signature_base64_with_empty_message() {
        let sig = compute_signature_base64(b"", "secret&");
        assert_eq!(sig.len(), 44);
    }

    #[test]
    fn test_signature_depends_on_key_delimiter() {
        let with = compute_signature_base64(b"base", "secret&");
        let without = compute_signature_base64(b"base", "secret");
        assert_ne!(with, without);
    }

    #[test]
    fn test_sha1_hex_known_values() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(hex::encode([0x00, 0xff, 0xab, 0xcd]), "00ffabcd");
        assert_eq!(hex::encode([]), "");
        assert_eq!(hex::encode([0x12, 0x34]), "1234");
    }
}
