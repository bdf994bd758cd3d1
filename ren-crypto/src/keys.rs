//! X25519 key pair generation and raw-key import/export.

use alloc::string::String;

use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::consts::{KEY_SIZE, X25519_KEY_SIZE};
use crate::encoding::{b64_decode, b64_encode};
use crate::error::CryptoError;
use crate::random::random_array;
use crate::types::{AeadKey, KeyPair};

/// Generate an X25519 key pair for key wrapping.
///
/// Both halves are exported as base64 over the raw 32-byte representation.
#[must_use]
pub fn generate_key_pair() -> KeyPair {
    let sk = StaticSecret::from(random_array::<X25519_KEY_SIZE>());
    let pk = X25519PublicKey::from(&sk);
    KeyPair {
        public_key: export_public_key_b64(&pk),
        private_key: export_private_key_b64(&sk),
    }
}

/// Generate a fresh 256-bit symmetric message key.
#[must_use]
pub fn generate_message_key() -> AeadKey {
    let mut bytes = random_array::<KEY_SIZE>();
    // 32 random bytes always form a valid key.
    let key = AeadKey::from_bytes(&bytes).expect("key size");
    bytes.zeroize();
    key
}

/// Export an X25519 public key as base64 over the raw 32 bytes.
#[must_use]
pub fn export_public_key_b64(public_key: &X25519PublicKey) -> String {
    b64_encode(public_key.as_bytes())
}

/// Export an X25519 private key as base64 over the raw 32 bytes.
#[must_use]
pub fn export_private_key_b64(private_key: &StaticSecret) -> String {
    let mut bytes = private_key.to_bytes();
    let out = b64_encode(&bytes);
    bytes.zeroize();
    out
}

/// Import an X25519 public key from base64 (raw 32 bytes expected).
pub fn import_public_key_b64(b64: &str) -> Result<X25519PublicKey, CryptoError> {
    Ok(X25519PublicKey::from(decode_raw_key(b64)?))
}

/// Import an X25519 private key from base64 (raw 32 bytes expected).
pub fn import_private_key_b64(b64: &str) -> Result<StaticSecret, CryptoError> {
    Ok(StaticSecret::from(decode_raw_key(b64)?))
}

fn decode_raw_key(b64: &str) -> Result<[u8; X25519_KEY_SIZE], CryptoError> {
    let mut bytes = b64_decode(b64)?;
    if bytes.len() != X25519_KEY_SIZE {
        bytes.zeroize();
        return Err(CryptoError::invalid_key_size());
    }
    let mut arr = [0u8; X25519_KEY_SIZE];
    arr.copy_from_slice(&bytes);
    bytes.zeroize();
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_pair_halves_decode_to_32_bytes() {
        let kp = generate_key_pair();
        assert_eq!(b64_decode(&kp.public_key).unwrap().len(), X25519_KEY_SIZE);
        assert_eq!(b64_decode(&kp.private_key).unwrap().len(), X25519_KEY_SIZE);
    }

    #[test]
    fn import_export_round_trip() {
        let kp = generate_key_pair();
        let pk = import_public_key_b64(&kp.public_key).unwrap();
        let sk = import_private_key_b64(&kp.private_key).unwrap();
        assert_eq!(export_public_key_b64(&pk), kp.public_key);
        assert_eq!(export_private_key_b64(&sk), kp.private_key);
    }

    #[test]
    fn public_half_matches_private_half() {
        let kp = generate_key_pair();
        let sk = import_private_key_b64(&kp.private_key).unwrap();
        let derived = X25519PublicKey::from(&sk);
        assert_eq!(export_public_key_b64(&derived), kp.public_key);
    }

    #[test]
    fn import_rejects_wrong_length() {
        let err = import_public_key_b64("AAAA").unwrap_err();
        assert_eq!(err.kind, crate::error::CryptoErrorKind::InvalidKeySize);
        assert!(import_private_key_b64("AAAA").is_err());
    }

    #[test]
    fn message_keys_are_distinct() {
        let a = generate_message_key();
        let b = generate_message_key();
        assert_ne!(a.to_bytes(), b.to_bytes());
    }
}
