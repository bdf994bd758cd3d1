//! Symmetric key derivation from passwords and arbitrary secret strings.

use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::consts::{KEY_SIZE, PBKDF2_ITERATIONS};
use crate::encoding::b64_decode;
use crate::error::CryptoError;
use crate::types::AeadKey;

/// Derive a 256-bit key from a password and a base64 salt.
///
/// PBKDF2-HMAC-SHA256 with 100 000 iterations. Deterministic for a fixed
/// (password, salt) pair. Fails only when the salt is not valid base64.
pub fn derive_key_from_password(password: &str, salt_b64: &str) -> Result<AeadKey, CryptoError> {
    let salt = b64_decode(salt_b64)?;
    let mut out = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut out);
    // from_bytes cannot fail on a KEY_SIZE array.
    let key = AeadKey::from_bytes(&out).expect("key size");
    out.zeroize();
    Ok(key)
}

/// Derive a 256-bit key from an arbitrary secret string: SHA-256(secret).
#[must_use]
pub fn derive_key_from_string(secret: &str) -> AeadKey {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let digest = hasher.finalize();
    AeadKey::from_bytes(&digest).expect("key size")
}
