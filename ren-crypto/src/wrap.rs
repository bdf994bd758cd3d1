//! Key wrapping: seal a symmetric key to a recipient's X25519 public key.
//!
//! Each wrap generates a one-time ephemeral key pair, runs X25519 ECDH
//! against the recipient key, derives a wrapping key with HKDF-SHA256, and
//! seals the raw symmetric key bytes with the AEAD. Only the holder of the
//! matching private key can recompute the shared secret and unwrap.

use hkdf::Hkdf;
use sha2::Sha256;
use x25519_dalek::{PublicKey as X25519PublicKey, SharedSecret, StaticSecret};
use zeroize::Zeroize;

use crate::cipher::{aead_decrypt, aead_encrypt, nonce_from_b64};
use crate::consts::{KEY_SIZE, NONCE_SIZE, WRAP_HKDF_INFO, X25519_KEY_SIZE};
use crate::encoding::{b64_decode, b64_encode};
use crate::error::CryptoError;
use crate::keys::{export_public_key_b64, import_private_key_b64, import_public_key_b64};
use crate::random::random_array;
use crate::types::{AeadKey, WrappedKey};

/// Derive the AEAD wrapping key from an ECDH shared secret.
fn derive_wrap_key(shared: &SharedSecret) -> Result<AeadKey, CryptoError> {
    let hk = Hkdf::<Sha256>::new(None, shared.as_bytes());
    let mut okm = [0u8; KEY_SIZE];
    hk.expand(WRAP_HKDF_INFO, &mut okm)
        .map_err(|_| CryptoError::key_derivation())?;
    let key = AeadKey::from_bytes(&okm).expect("key size");
    okm.zeroize();
    Ok(key)
}

/// Wrap a symmetric key for the holder of `receiver_public_key_b64`.
pub fn wrap_symmetric_key(
    key_to_wrap: &AeadKey,
    receiver_public_key_b64: &str,
) -> Result<WrappedKey, CryptoError> {
    let receiver_pk = import_public_key_b64(receiver_public_key_b64)?;

    // One ephemeral pair per wrap; the secret half never leaves this call.
    let eph_sk = StaticSecret::from(random_array::<X25519_KEY_SIZE>());
    let eph_pk = X25519PublicKey::from(&eph_sk);

    let shared = eph_sk.diffie_hellman(&receiver_pk);
    let wrap_key = derive_wrap_key(&shared)?;

    let nonce = random_array::<NONCE_SIZE>();
    let mut key_bytes = key_to_wrap.to_bytes();
    let sealed = aead_encrypt(&wrap_key, &nonce, &key_bytes);
    key_bytes.zeroize();

    Ok(WrappedKey {
        wrapped_key: b64_encode(&sealed?),
        ephemeral_public_key: export_public_key_b64(&eph_pk),
        nonce: b64_encode(&nonce),
    })
}

/// Unwrap a symmetric key previously sealed by [`wrap_symmetric_key`].
///
/// Fails with `DecryptionFailed` when the private key does not match the
/// public key the envelope was wrapped to, or when the envelope was altered.
pub fn unwrap_symmetric_key(
    wrapped_key_b64: &str,
    ephemeral_public_key_b64: &str,
    nonce_b64: &str,
    receiver_private_key_b64: &str,
) -> Result<AeadKey, CryptoError> {
    let sealed = b64_decode(wrapped_key_b64)?;
    let nonce = nonce_from_b64(nonce_b64)?;
    let eph_pk = import_public_key_b64(ephemeral_public_key_b64)?;
    let receiver_sk = import_private_key_b64(receiver_private_key_b64)?;

    let shared = receiver_sk.diffie_hellman(&eph_pk);
    let wrap_key = derive_wrap_key(&shared)?;

    let mut key_bytes = aead_decrypt(&wrap_key, &nonce, &sealed)?;
    let key = AeadKey::from_bytes(&key_bytes);
    key_bytes.zeroize();
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_key_pair, generate_message_key};

    #[test]
    fn wrap_unwrap_round_trip() {
        let kp = generate_key_pair();
        let key = generate_message_key();

        let wrapped = wrap_symmetric_key(&key, &kp.public_key).unwrap();
        let unwrapped = unwrap_symmetric_key(
            &wrapped.wrapped_key,
            &wrapped.ephemeral_public_key,
            &wrapped.nonce,
            &kp.private_key,
        )
        .unwrap();

        assert_eq!(unwrapped.to_bytes(), key.to_bytes());
    }

    #[test]
    fn wrong_private_key_fails() {
        let alice = generate_key_pair();
        let mallory = generate_key_pair();
        let key = generate_message_key();

        let wrapped = wrap_symmetric_key(&key, &alice.public_key).unwrap();
        let err = unwrap_symmetric_key(
            &wrapped.wrapped_key,
            &wrapped.ephemeral_public_key,
            &wrapped.nonce,
            &mallory.private_key,
        )
        .unwrap_err();
        assert_eq!(err.kind, crate::error::CryptoErrorKind::DecryptionFailed);
    }

    #[test]
    fn ephemeral_keys_differ_per_wrap() {
        let kp = generate_key_pair();
        let key = generate_message_key();
        let a = wrap_symmetric_key(&key, &kp.public_key).unwrap();
        let b = wrap_symmetric_key(&key, &kp.public_key).unwrap();
        assert_ne!(a.ephemeral_public_key, b.ephemeral_public_key);
        assert_ne!(a.wrapped_key, b.wrapped_key);
    }

    #[test]
    fn tampered_envelope_fails() {
        let kp = generate_key_pair();
        let key = generate_message_key();
        let wrapped = wrap_symmetric_key(&key, &kp.public_key).unwrap();

        let mut sealed = b64_decode(&wrapped.wrapped_key).unwrap();
        sealed[0] ^= 0xff;
        let result = unwrap_symmetric_key(
            &b64_encode(&sealed),
            &wrapped.ephemeral_public_key,
            &wrapped.nonce,
            &kp.private_key,
        );
        assert!(result.is_err());
    }
}
