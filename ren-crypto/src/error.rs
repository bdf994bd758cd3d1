use core::fmt;

/// Specific kind of crypto error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoErrorKind {
    /// Input is not valid standard base64.
    InvalidEncoding,
    /// Key material does not match the 32-byte cipher suite requirement.
    InvalidKeySize,
    /// Nonce is not exactly 12 bytes after decoding.
    InvalidNonceSize,
    /// Combined payload is too short to contain a nonce.
    TruncatedPayload,
    /// AEAD decryption failed (wrong key, wrong nonce, or tampered data).
    DecryptionFailed,
    /// Decrypted plaintext is not valid UTF-8 where text was expected.
    InvalidUtf8,
    /// Key derivation produced no output (HKDF expand rejected the request).
    KeyDerivation,
}

/// Error returned by Ren crypto operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoError {
    pub kind: CryptoErrorKind,
}

impl CryptoError {
    #[must_use]
    pub fn new(kind: CryptoErrorKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn invalid_encoding() -> Self {
        Self::new(CryptoErrorKind::InvalidEncoding)
    }

    #[must_use]
    pub fn invalid_key_size() -> Self {
        Self::new(CryptoErrorKind::InvalidKeySize)
    }

    #[must_use]
    pub fn invalid_nonce_size() -> Self {
        Self::new(CryptoErrorKind::InvalidNonceSize)
    }

    #[must_use]
    pub fn truncated_payload() -> Self {
        Self::new(CryptoErrorKind::TruncatedPayload)
    }

    #[must_use]
    pub fn decryption_failed() -> Self {
        Self::new(CryptoErrorKind::DecryptionFailed)
    }

    #[must_use]
    pub fn invalid_utf8() -> Self {
        Self::new(CryptoErrorKind::InvalidUtf8)
    }

    #[must_use]
    pub fn key_derivation() -> Self {
        Self::new(CryptoErrorKind::KeyDerivation)
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self.kind {
            CryptoErrorKind::InvalidEncoding => "input is not valid base64",
            CryptoErrorKind::InvalidKeySize => "invalid key size",
            CryptoErrorKind::InvalidNonceSize => "invalid nonce size",
            CryptoErrorKind::TruncatedPayload => "payload too short to contain a nonce",
            CryptoErrorKind::DecryptionFailed => "AEAD decryption failed",
            CryptoErrorKind::InvalidUtf8 => "plaintext is not valid UTF-8",
            CryptoErrorKind::KeyDerivation => "key derivation failed",
        };
        f.write_str(desc)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}
