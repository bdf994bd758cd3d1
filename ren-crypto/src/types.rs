use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::consts::KEY_SIZE;
use crate::encoding::{b64_decode, b64_encode};
use crate::error::CryptoError;

/// 256-bit symmetric key for the ChaCha20-Poly1305 AEAD.
///
/// The raw bytes are zeroized when the key is dropped. The base64 form is
/// only produced on explicit export.
#[derive(Clone)]
pub struct AeadKey([u8; KEY_SIZE]);

impl Drop for AeadKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl core::fmt::Debug for AeadKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AeadKey(..)")
    }
}

impl AeadKey {
    /// Build a key from raw bytes. Rejects anything but exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::invalid_key_size());
        }
        let mut arr = [0u8; KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Build a key from its base64 export form.
    ///
    /// The intermediate decode buffer is zeroized before returning.
    pub fn from_b64(b64: &str) -> Result<Self, CryptoError> {
        let mut bytes = b64_decode(b64)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Copy of the raw key bytes. The caller owns the copy and is
    /// responsible for zeroizing it.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0
    }

    /// Export the key as base64 text.
    #[must_use]
    pub fn to_b64(&self) -> String {
        b64_encode(&self.0)
    }
}

/// X25519 key pair, both halves exported as base64 raw 32-byte keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

/// Output of message encryption: ciphertext and nonce as separate base64
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    pub ciphertext: String,
    pub nonce: String,
}

/// Output of file encryption. Filename and mimetype pass through unencrypted
/// so the receiving side can route the payload before decrypting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFile {
    pub ciphertext: String,
    pub nonce: String,
    pub filename: String,
    pub mimetype: String,
}

/// Output of sealing a file together with a caption message under one nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFileWithMessage {
    pub enc_file: String,
    pub ciphertext: String,
    pub nonce: String,
    pub filename: String,
    pub mimetype: String,
}

/// Decrypted file plus its caption message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedFileWithMessage {
    pub file: Vec<u8>,
    pub message: String,
    pub filename: String,
    pub mimetype: String,
}

/// Envelope for a symmetric key wrapped to a recipient's public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedKey {
    pub wrapped_key: String,
    pub ephemeral_public_key: String,
    pub nonce: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_rejects_wrong_sizes() {
        assert!(AeadKey::from_bytes(&[0u8; 16]).is_err());
        assert!(AeadKey::from_bytes(&[0u8; 33]).is_err());
        assert!(AeadKey::from_bytes(&[0u8; 32]).is_ok());
    }

    #[test]
    fn key_base64_round_trip() {
        let key = AeadKey::from_bytes(&[7u8; 32]).unwrap();
        let restored = AeadKey::from_b64(&key.to_b64()).unwrap();
        assert_eq!(restored.to_bytes(), key.to_bytes());
    }

    #[test]
    fn key_from_b64_rejects_garbage() {
        assert_eq!(
            AeadKey::from_b64("!!").unwrap_err().kind,
            crate::error::CryptoErrorKind::InvalidEncoding
        );
        // Valid base64, wrong length.
        assert_eq!(
            AeadKey::from_b64("AAAA").unwrap_err().kind,
            crate::error::CryptoErrorKind::InvalidKeySize
        );
    }
}
