//! Low-level ChaCha20-Poly1305 seal/open and nonce parsing.

use alloc::vec::Vec;

use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};

use crate::consts::NONCE_SIZE;
use crate::encoding::b64_decode;
use crate::error::CryptoError;
use crate::types::AeadKey;

/// Parse a nonce from raw bytes. Rejects anything but exactly 12 bytes.
pub fn nonce_from_slice(bytes: &[u8]) -> Result<[u8; NONCE_SIZE], CryptoError> {
    if bytes.len() != NONCE_SIZE {
        return Err(CryptoError::invalid_nonce_size());
    }
    let mut arr = [0u8; NONCE_SIZE];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// Parse a nonce from its base64 text form.
pub fn nonce_from_b64(b64: &str) -> Result<[u8; NONCE_SIZE], CryptoError> {
    nonce_from_slice(&b64_decode(b64)?)
}

/// Encrypt plaintext under the given key and nonce.
///
/// Returns ciphertext with the 16-byte Poly1305 tag appended.
pub fn aead_encrypt(
    key: &AeadKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::invalid_key_size())?;
    cipher
        .encrypt(&Nonce::from(*nonce), plaintext)
        .map_err(|_| CryptoError::decryption_failed())
}

/// Decrypt ciphertext + tag under the given key and nonce.
///
/// Fails with `DecryptionFailed` on any authentication mismatch; the error
/// does not distinguish a wrong key from tampered data.
pub fn aead_decrypt(
    key: &AeadKey,
    nonce: &[u8; NONCE_SIZE],
    ciphertext_with_tag: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::invalid_key_size())?;
    cipher
        .decrypt(&Nonce::from(*nonce), ciphertext_with_tag)
        .map_err(|_| CryptoError::decryption_failed())
}
