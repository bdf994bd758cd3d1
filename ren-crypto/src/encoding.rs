//! Base64 helpers for the caller-visible text form of binary values.
//!
//! Every key, nonce, salt, and ciphertext crosses the SDK boundary as a
//! standard-alphabet, padded base64 string.

use alloc::string::String;
use alloc::vec::Vec;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::CryptoError;

/// Encode bytes as standard padded base64.
#[must_use]
pub fn b64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard padded base64.
pub fn b64_decode(s: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD.decode(s).map_err(|_| CryptoError::invalid_encoding())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = [0x00u8, 0x01, 0xfe, 0xff];
        assert_eq!(b64_decode(&b64_encode(&data)).unwrap(), data);
    }

    #[test]
    fn rejects_invalid_alphabet() {
        let err = b64_decode("not base64 !!").unwrap_err();
        assert_eq!(err.kind, crate::error::CryptoErrorKind::InvalidEncoding);
    }

    #[test]
    fn rejects_url_safe_alphabet() {
        // Standard alphabet only; '-' and '_' belong to the URL-safe variant.
        assert!(b64_decode("a-b_").is_err());
    }
}
