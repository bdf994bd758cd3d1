#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod cipher;
pub mod consts;
pub mod encoding;
pub mod error;
pub mod file;
pub mod kdf;
pub mod keys;
pub mod message;
pub mod random;
pub mod types;
pub mod wrap;

pub use error::{CryptoError, CryptoErrorKind};
pub use types::{
    AeadKey, DecryptedFileWithMessage, EncryptedFile, EncryptedFileWithMessage, EncryptedMessage,
    KeyPair, WrappedKey,
};

pub use random::{generate_nonce, generate_salt};

pub use keys::{
    export_private_key_b64, export_public_key_b64, generate_key_pair, generate_message_key,
    import_private_key_b64, import_public_key_b64,
};

pub use kdf::{derive_key_from_password, derive_key_from_string};

pub use message::{decrypt_data, decrypt_message, encrypt_data, encrypt_message};

pub use file::{
    decrypt_file, decrypt_file_raw, decrypt_file_with_message, encrypt_file,
    encrypt_file_with_message,
};

pub use wrap::{unwrap_symmetric_key, wrap_symmetric_key};
