//! File payload encryption.
//!
//! Ciphertext travels as base64 for JSON transports and as raw bytes for the
//! streaming download path (`decrypt_file_raw`). A file can also be sealed
//! together with a caption message under a single nonce.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::cipher::{aead_decrypt, aead_encrypt, nonce_from_b64};
use crate::consts::NONCE_SIZE;
use crate::encoding::{b64_decode, b64_encode};
use crate::error::CryptoError;
use crate::random::random_array;
use crate::types::{AeadKey, DecryptedFileWithMessage, EncryptedFile, EncryptedFileWithMessage};

/// Encrypt raw file bytes. Filename and mimetype are carried alongside the
/// ciphertext unencrypted.
pub fn encrypt_file(
    bytes: &[u8],
    filename: &str,
    mimetype: &str,
    key: &AeadKey,
) -> Result<EncryptedFile, CryptoError> {
    let nonce = random_array::<NONCE_SIZE>();
    let ciphertext = aead_encrypt(key, &nonce, bytes)?;
    Ok(EncryptedFile {
        ciphertext: b64_encode(&ciphertext),
        nonce: b64_encode(&nonce),
        filename: filename.to_string(),
        mimetype: mimetype.to_string(),
    })
}

/// Decrypt a file from its base64 ciphertext and nonce.
pub fn decrypt_file(
    ciphertext_b64: &str,
    nonce_b64: &str,
    key: &AeadKey,
) -> Result<Vec<u8>, CryptoError> {
    let ciphertext = b64_decode(ciphertext_b64)?;
    decrypt_file_raw(&ciphertext, nonce_b64, key)
}

/// Decrypt a file from raw ciphertext bytes and a base64 nonce.
///
/// Skips the base64 decode of the payload for callers that already hold the
/// binary ciphertext (for example a streamed download).
pub fn decrypt_file_raw(
    ciphertext: &[u8],
    nonce_b64: &str,
    key: &AeadKey,
) -> Result<Vec<u8>, CryptoError> {
    let nonce = nonce_from_b64(nonce_b64)?;
    aead_decrypt(key, &nonce, ciphertext)
}

/// Encrypt a file and a caption message under one key and one nonce.
pub fn encrypt_file_with_message(
    bytes: &[u8],
    message: &str,
    key: &AeadKey,
    filename: &str,
    mimetype: &str,
) -> Result<EncryptedFileWithMessage, CryptoError> {
    let nonce = random_array::<NONCE_SIZE>();
    let enc_file = aead_encrypt(key, &nonce, bytes)?;
    let enc_msg = aead_encrypt(key, &nonce, message.as_bytes())?;
    Ok(EncryptedFileWithMessage {
        enc_file: b64_encode(&enc_file),
        ciphertext: b64_encode(&enc_msg),
        nonce: b64_encode(&nonce),
        filename: filename.to_string(),
        mimetype: mimetype.to_string(),
    })
}

/// Decrypt the output of [`encrypt_file_with_message`], returning the file
/// bytes and the caption string.
pub fn decrypt_file_with_message(
    enc_file_b64: &str,
    ciphertext_b64: &str,
    nonce_b64: &str,
    key: &AeadKey,
    filename: &str,
    mimetype: &str,
) -> Result<DecryptedFileWithMessage, CryptoError> {
    let nonce = nonce_from_b64(nonce_b64)?;
    let file_ct = b64_decode(enc_file_b64)?;
    let msg_ct = b64_decode(ciphertext_b64)?;
    let file = aead_decrypt(key, &nonce, &file_ct)?;
    let msg = aead_decrypt(key, &nonce, &msg_ct)?;
    let message = String::from_utf8(msg).map_err(|_| CryptoError::invalid_utf8())?;
    Ok(DecryptedFileWithMessage {
        file,
        message,
        filename: filename.to_string(),
        mimetype: mimetype.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_message_key;

    #[test]
    fn file_round_trip() {
        let key = generate_message_key();
        let payload = [0u8, 159, 146, 150, 255, 1, 2, 3];
        let enc = encrypt_file(&payload, "photo.jpg", "image/jpeg", &key).unwrap();
        assert_eq!(enc.filename, "photo.jpg");
        assert_eq!(enc.mimetype, "image/jpeg");
        let dec = decrypt_file(&enc.ciphertext, &enc.nonce, &key).unwrap();
        assert_eq!(dec, payload);
    }

    #[test]
    fn raw_path_matches_base64_path() {
        let key = generate_message_key();
        let enc = encrypt_file(b"raw bytes", "f.bin", "application/octet-stream", &key).unwrap();
        let ct = b64_decode(&enc.ciphertext).unwrap();
        let via_raw = decrypt_file_raw(&ct, &enc.nonce, &key).unwrap();
        let via_b64 = decrypt_file(&enc.ciphertext, &enc.nonce, &key).unwrap();
        assert_eq!(via_raw, via_b64);
    }

    #[test]
    fn file_with_message_round_trip() {
        let key = generate_message_key();
        let enc =
            encrypt_file_with_message(b"file data", "see attachment", &key, "a.txt", "text/plain")
                .unwrap();
        let dec = decrypt_file_with_message(
            &enc.enc_file,
            &enc.ciphertext,
            &enc.nonce,
            &key,
            &enc.filename,
            &enc.mimetype,
        )
        .unwrap();
        assert_eq!(dec.file, b"file data");
        assert_eq!(dec.message, "see attachment");
        assert_eq!(dec.filename, "a.txt");
        assert_eq!(dec.mimetype, "text/plain");
    }

    #[test]
    fn empty_file_is_valid() {
        let key = generate_message_key();
        let enc = encrypt_file(b"", "empty", "application/octet-stream", &key).unwrap();
        assert_eq!(decrypt_file(&enc.ciphertext, &enc.nonce, &key).unwrap(), b"");
    }
}
