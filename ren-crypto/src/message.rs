//! Text payload encryption in the two wire forms the SDK exposes.
//!
//! `encrypt_data` packs nonce and ciphertext into a single base64 string
//! (nonce ‖ ciphertext), matching the storage format for server-held blobs.
//! `encrypt_message` keeps ciphertext and nonce as separate base64 fields,
//! matching the chat message transport format.

use alloc::string::String;
use alloc::vec::Vec;

use crate::cipher::{aead_encrypt, aead_decrypt, nonce_from_b64, nonce_from_slice};
use crate::consts::NONCE_SIZE;
use crate::encoding::{b64_decode, b64_encode};
use crate::error::CryptoError;
use crate::random::random_array;
use crate::types::{AeadKey, EncryptedMessage};

/// Encrypt a string into the combined form: base64(nonce(12) ‖ ciphertext).
pub fn encrypt_data(data: &str, key: &AeadKey) -> Result<String, CryptoError> {
    let nonce = random_array::<NONCE_SIZE>();
    let ciphertext = aead_encrypt(key, &nonce, data.as_bytes())?;
    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(b64_encode(&out))
}

/// Decrypt the combined form produced by [`encrypt_data`] back into a string.
pub fn decrypt_data(b64_combined: &str, key: &AeadKey) -> Result<String, CryptoError> {
    let data = b64_decode(b64_combined)?;
    if data.len() < NONCE_SIZE {
        return Err(CryptoError::truncated_payload());
    }
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);
    let nonce = nonce_from_slice(nonce_bytes)?;
    let plaintext = aead_decrypt(key, &nonce, ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::invalid_utf8())
}

/// Encrypt a message, returning ciphertext and nonce as separate base64
/// fields.
pub fn encrypt_message(message: &str, key: &AeadKey) -> Result<EncryptedMessage, CryptoError> {
    let nonce = random_array::<NONCE_SIZE>();
    let ciphertext = aead_encrypt(key, &nonce, message.as_bytes())?;
    Ok(EncryptedMessage {
        ciphertext: b64_encode(&ciphertext),
        nonce: b64_encode(&nonce),
    })
}

/// Decrypt a message from its base64 ciphertext and nonce.
pub fn decrypt_message(
    ciphertext_b64: &str,
    nonce_b64: &str,
    key: &AeadKey,
) -> Result<String, CryptoError> {
    let ciphertext = b64_decode(ciphertext_b64)?;
    let nonce = nonce_from_b64(nonce_b64)?;
    let plaintext = aead_decrypt(key, &nonce, &ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::invalid_utf8())
}
