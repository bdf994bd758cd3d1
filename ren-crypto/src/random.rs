//! Random token generation backed by the OS entropy source.

use alloc::string::String;

use crate::consts::{NONCE_SIZE, SALT_SIZE};
use crate::encoding::b64_encode;

/// Fill a fixed-size array from the OS entropy source.
///
/// Entropy failure is unrecoverable for a cryptographic SDK, so this
/// panics instead of returning an error the caller could not act on.
pub(crate) fn random_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    getrandom::getrandom(&mut out).expect("os entropy source");
    out
}

/// Generate a fresh 12-byte AEAD nonce as a base64 token.
#[must_use]
pub fn generate_nonce() -> String {
    b64_encode(&random_array::<NONCE_SIZE>())
}

/// Generate a fresh 16-byte KDF salt as a base64 token.
#[must_use]
pub fn generate_salt() -> String {
    b64_encode(&random_array::<SALT_SIZE>())
}
