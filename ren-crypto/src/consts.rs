//! Fixed sizes and protocol constants for the Ren cipher suite.

/// Symmetric AEAD key size in bytes (ChaCha20-Poly1305, 256-bit).
pub const KEY_SIZE: usize = 32;

/// AEAD nonce size in bytes (96-bit IETF ChaCha20-Poly1305 nonce).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Salt size in bytes for password-based key derivation.
pub const SALT_SIZE: usize = 16;

/// Raw X25519 public/private key size in bytes.
pub const X25519_KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count for password-derived keys.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// HKDF-SHA256 domain separation info for the key-wrapping envelope.
pub const WRAP_HKDF_INFO: &[u8] = b"ren-sdk-wrap";
