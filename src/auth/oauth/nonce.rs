//! `oauth_nonce` generation.

use rand::RngCore;

use crate::auth::oauth::hmac::sha1_hex;

/// Number of random bytes hashed into each nonce.
pub const NONCE_BYTES: usize = 16;

/// Generates a fresh nonce: the hex SHA-1 digest of 16 random bytes.
///
/// Bytes come from the thread-local CSPRNG. A failure of the OS entropy
/// source panics; it is not a recoverable condition.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::auth::oauth::generate_nonce;
///
/// let nonce = generate_nonce();
/// assert_eq!(nonce.len(), 40);
/// assert_ne!(nonce, generate_nonce());
/// ```
#[must_use]
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    sha1_hex(&bytes)
}
