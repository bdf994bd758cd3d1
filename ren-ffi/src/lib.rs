//! C ABI bridge for ren-crypto.
//!
//! Exposes the crypto operations through `extern "C"` so the mobile bindings
//! (Kotlin, Swift, Dart) can call a single shared implementation.
//!
//! Ownership contract: every returned string, buffer, or struct is owned by
//! the caller until it is passed to its matching `ren_free_*` function, which
//! frees every owned field in one call. Caller-supplied pointers are borrowed
//! read-only for the duration of the call. Failure is signalled by a NULL
//! string/buffer or a struct whose fields are all NULL; no error codes cross
//! the boundary. Panics are caught at the boundary and mapped to the same
//! failure sentinel.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;
use std::slice;

use ren_crypto::types::AeadKey;
use ren_crypto::{
    decrypt_data, decrypt_file, decrypt_file_raw, decrypt_file_with_message, decrypt_message,
    derive_key_from_password, derive_key_from_string, encrypt_data, encrypt_file,
    encrypt_file_with_message, encrypt_message, generate_key_pair, generate_message_key,
    generate_nonce, generate_salt, unwrap_symmetric_key, wrap_symmetric_key,
};

// ---------------------------------------------------------------------------
// Marshaling helpers
// ---------------------------------------------------------------------------

/// Run `f`, converting a panic into `default` so unwinding never crosses the
/// C boundary.
fn ffi_catch<T, F: FnOnce() -> T>(default: T, f: F) -> T {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or(default)
}

/// Borrow a C string as `&str`. Returns `None` for NULL or non-UTF-8 input.
///
/// # Safety
/// `c_str`, when non-NULL, must point to a NUL-terminated string valid for
/// the duration of the call.
unsafe fn c_str_to_str<'a>(c_str: *const c_char) -> Option<&'a str> {
    if c_str.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(c_str) }.to_str().ok()
}

/// Hand a Rust string to the caller as an owned NUL-terminated C string.
///
/// Returns NULL if the string contains an interior NUL (never the case for
/// base64 output). Must be released with `ren_free_string`.
fn string_to_c(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Hand a byte vector to the caller as an owned pointer + length pair.
///
/// The buffer is shrunk to its exact length so that one deallocation with
/// the reported length releases it completely. Must be released with
/// `ren_free_bytes`.
///
/// # Safety
/// `out_len` must point to a writeable `usize`.
unsafe fn bytes_to_c(bytes: Vec<u8>, out_len: *mut usize) -> *mut u8 {
    let boxed = bytes.into_boxed_slice();
    let len = boxed.len();
    let ptr = Box::into_raw(boxed).cast::<u8>();
    unsafe {
        *out_len = len;
    }
    ptr
}

/// Decode a base64 key argument into an `AeadKey`.
///
/// # Safety
/// Same contract as [`c_str_to_str`].
unsafe fn key_from_c(key_b64: *const c_char) -> Option<AeadKey> {
    let s = unsafe { c_str_to_str(key_b64) }?;
    AeadKey::from_b64(s).ok()
}

/// Build an `AeadKey` from a raw caller-owned byte buffer.
///
/// # Safety
/// `key_ptr`, when non-NULL, must be valid for reads of `key_len` bytes.
unsafe fn key_from_raw(key_ptr: *const u8, key_len: usize) -> Option<AeadKey> {
    if key_ptr.is_null() {
        return None;
    }
    let bytes = unsafe { slice::from_raw_parts(key_ptr, key_len) };
    AeadKey::from_bytes(bytes).ok()
}

// ---------------------------------------------------------------------------
// C-compatible structs
// ---------------------------------------------------------------------------

/// X25519 key pair; both fields are owned base64 strings.
#[repr(C)]
pub struct RenKeyPair {
    pub public_key: *mut c_char,
    pub private_key: *mut c_char,
}

impl RenKeyPair {
    fn empty() -> Self {
        Self {
            public_key: ptr::null_mut(),
            private_key: ptr::null_mut(),
        }
    }
}

/// Encrypted message; both fields are owned base64 strings.
#[repr(C)]
pub struct RenEncryptedMessage {
    pub ciphertext: *mut c_char,
    pub nonce: *mut c_char,
}

impl RenEncryptedMessage {
    fn empty() -> Self {
        Self {
            ciphertext: ptr::null_mut(),
            nonce: ptr::null_mut(),
        }
    }
}

/// Encrypted file; all fields are owned strings, filename and mimetype pass
/// through unencrypted.
#[repr(C)]
pub struct RenEncryptedFile {
    pub ciphertext: *mut c_char,
    pub nonce: *mut c_char,
    pub filename: *mut c_char,
    pub mimetype: *mut c_char,
}

impl RenEncryptedFile {
    fn empty() -> Self {
        Self {
            ciphertext: ptr::null_mut(),
            nonce: ptr::null_mut(),
            filename: ptr::null_mut(),
            mimetype: ptr::null_mut(),
        }
    }
}

/// File and caption sealed under one nonce; all fields are owned strings.
#[repr(C)]
pub struct RenEncryptedFileWithMessage {
    pub enc_file: *mut c_char,
    pub ciphertext: *mut c_char,
    pub nonce: *mut c_char,
    pub filename: *mut c_char,
    pub mimetype: *mut c_char,
}

impl RenEncryptedFileWithMessage {
    fn empty() -> Self {
        Self {
            enc_file: ptr::null_mut(),
            ciphertext: ptr::null_mut(),
            nonce: ptr::null_mut(),
            filename: ptr::null_mut(),
            mimetype: ptr::null_mut(),
        }
    }
}

/// Symmetric key wrapped to a recipient public key; all fields are owned
/// base64 strings.
#[repr(C)]
pub struct RenWrappedKey {
    pub wrapped_key: *mut c_char,
    pub ephemeral_public_key: *mut c_char,
    pub nonce: *mut c_char,
}

impl RenWrappedKey {
    fn empty() -> Self {
        Self {
            wrapped_key: ptr::null_mut(),
            ephemeral_public_key: ptr::null_mut(),
            nonce: ptr::null_mut(),
        }
    }
}

/// Decrypted file plus its caption; `data`/`len` is an owned byte buffer,
/// the remaining fields are owned strings.
#[repr(C)]
pub struct RenDecryptedFile {
    pub data: *mut u8,
    pub len: usize,
    pub filename: *mut c_char,
    pub mimetype: *mut c_char,
    pub message: *mut c_char,
}

impl RenDecryptedFile {
    fn empty() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
            filename: ptr::null_mut(),
            mimetype: ptr::null_mut(),
            message: ptr::null_mut(),
        }
    }
}

// ---------------------------------------------------------------------------
// Release functions
// ---------------------------------------------------------------------------

/// Free a string previously returned by this library.
///
/// # Safety
/// `s` must be NULL or a pointer returned by this library that has not been
/// freed yet. Calling twice on the same pointer is undefined.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_string(s: *mut c_char) {
    ffi_catch((), || {
        if !s.is_null() {
            drop(unsafe { CString::from_raw(s) });
        }
    });
}

/// Free a byte buffer previously returned by this library.
///
/// # Safety
/// `buf` must be NULL or a pointer returned by this library, and `len` must
/// be the exact length reported alongside it. Calling twice is undefined.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_bytes(buf: *mut u8, len: usize) {
    ffi_catch((), || {
        if !buf.is_null() {
            let s = ptr::slice_from_raw_parts_mut(buf, len);
            drop(unsafe { Box::from_raw(s) });
        }
    });
}

/// Free every owned field of a `RenKeyPair`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_key_pair(kp: RenKeyPair) {
    unsafe {
        ren_free_string(kp.public_key);
        ren_free_string(kp.private_key);
    }
}

/// Free every owned field of a `RenEncryptedMessage`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_encrypted_message(msg: RenEncryptedMessage) {
    unsafe {
        ren_free_string(msg.ciphertext);
        ren_free_string(msg.nonce);
    }
}

/// Free every owned field of a `RenEncryptedFile`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_encrypted_file(file: RenEncryptedFile) {
    unsafe {
        ren_free_string(file.ciphertext);
        ren_free_string(file.nonce);
        ren_free_string(file.filename);
        ren_free_string(file.mimetype);
    }
}

/// Free every owned field of a `RenEncryptedFileWithMessage`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_encrypted_file_with_message(file: RenEncryptedFileWithMessage) {
    unsafe {
        ren_free_string(file.enc_file);
        ren_free_string(file.ciphertext);
        ren_free_string(file.nonce);
        ren_free_string(file.filename);
        ren_free_string(file.mimetype);
    }
}

/// Free every owned field of a `RenWrappedKey`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_wrapped_key(wk: RenWrappedKey) {
    unsafe {
        ren_free_string(wk.wrapped_key);
        ren_free_string(wk.ephemeral_public_key);
        ren_free_string(wk.nonce);
    }
}

/// Free every owned field of a `RenDecryptedFile`.
///
/// # Safety
/// The struct must have been returned by this library and not freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_free_decrypted_file(file: RenDecryptedFile) {
    unsafe {
        ren_free_bytes(file.data, file.len);
        ren_free_string(file.filename);
        ren_free_string(file.mimetype);
        ren_free_string(file.message);
    }
}

// ---------------------------------------------------------------------------
// Key and token generation
// ---------------------------------------------------------------------------

/// Generate a fresh 12-byte AEAD nonce as an owned base64 string.
#[unsafe(no_mangle)]
pub extern "C" fn ren_generate_nonce() -> *mut c_char {
    ffi_catch(ptr::null_mut(), || string_to_c(generate_nonce()))
}

/// Generate a fresh 16-byte KDF salt as an owned base64 string.
#[unsafe(no_mangle)]
pub extern "C" fn ren_generate_salt() -> *mut c_char {
    ffi_catch(ptr::null_mut(), || string_to_c(generate_salt()))
}

/// Generate an X25519 key pair for key wrapping.
#[unsafe(no_mangle)]
pub extern "C" fn ren_generate_key_pair() -> RenKeyPair {
    ffi_catch(RenKeyPair::empty(), || {
        let kp = generate_key_pair();
        RenKeyPair {
            public_key: string_to_c(kp.public_key),
            private_key: string_to_c(kp.private_key),
        }
    })
}

/// Generate a fresh 256-bit symmetric message key as an owned base64 string.
#[unsafe(no_mangle)]
pub extern "C" fn ren_generate_message_key() -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        string_to_c(generate_message_key().to_b64())
    })
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

/// Derive a symmetric key from a password and base64 salt
/// (PBKDF2-HMAC-SHA256, 100 000 iterations).
///
/// Returns NULL when either argument is NULL or the salt is not valid base64.
///
/// # Safety
/// `password` and `salt_b64` must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_derive_key_from_password(
    password: *const c_char,
    salt_b64: *const c_char,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let Some(password) = (unsafe { c_str_to_str(password) }) else {
            return ptr::null_mut();
        };
        let Some(salt) = (unsafe { c_str_to_str(salt_b64) }) else {
            return ptr::null_mut();
        };
        match derive_key_from_password(password, salt) {
            Ok(key) => string_to_c(key.to_b64()),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Derive a symmetric key from an arbitrary secret string (SHA-256).
///
/// # Safety
/// `secret` must be NULL or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_derive_key_from_string(secret: *const c_char) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        match unsafe { c_str_to_str(secret) } {
            Some(secret) => string_to_c(derive_key_from_string(secret).to_b64()),
            None => ptr::null_mut(),
        }
    })
}

// ---------------------------------------------------------------------------
// Data encryption (combined nonce + ciphertext form)
// ---------------------------------------------------------------------------

/// Encrypt a string into the combined form: base64(nonce ‖ ciphertext).
///
/// # Safety
/// `data` and `key_b64` must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_encrypt_data(
    data: *const c_char,
    key_b64: *const c_char,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let Some(data) = (unsafe { c_str_to_str(data) }) else {
            return ptr::null_mut();
        };
        let Some(key) = (unsafe { key_from_c(key_b64) }) else {
            return ptr::null_mut();
        };
        match encrypt_data(data, &key) {
            Ok(combined) => string_to_c(combined),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Decrypt the combined form produced by `ren_encrypt_data`.
///
/// # Safety
/// `encrypted_b64` and `key_b64` must be NULL or valid NUL-terminated
/// strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_data(
    encrypted_b64: *const c_char,
    key_b64: *const c_char,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let Some(encrypted) = (unsafe { c_str_to_str(encrypted_b64) }) else {
            return ptr::null_mut();
        };
        let Some(key) = (unsafe { key_from_c(key_b64) }) else {
            return ptr::null_mut();
        };
        match decrypt_data(encrypted, &key) {
            Ok(plaintext) => string_to_c(plaintext),
            Err(_) => ptr::null_mut(),
        }
    })
}

// ---------------------------------------------------------------------------
// Message encryption (split ciphertext/nonce form)
// ---------------------------------------------------------------------------

/// Encrypt a message, returning ciphertext and nonce as separate owned
/// strings. Release with `ren_free_encrypted_message`.
///
/// # Safety
/// `message` and `key_b64` must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_encrypt_message(
    message: *const c_char,
    key_b64: *const c_char,
) -> RenEncryptedMessage {
    ffi_catch(RenEncryptedMessage::empty(), || {
        let Some(message) = (unsafe { c_str_to_str(message) }) else {
            return RenEncryptedMessage::empty();
        };
        let Some(key) = (unsafe { key_from_c(key_b64) }) else {
            return RenEncryptedMessage::empty();
        };
        match encrypt_message(message, &key) {
            Ok(enc) => RenEncryptedMessage {
                ciphertext: string_to_c(enc.ciphertext),
                nonce: string_to_c(enc.nonce),
            },
            Err(_) => RenEncryptedMessage::empty(),
        }
    })
}

/// Decrypt a message from its base64 ciphertext and nonce.
///
/// # Safety
/// All arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_message(
    ciphertext_b64: *const c_char,
    nonce_b64: *const c_char,
    key_b64: *const c_char,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let args = unsafe {
            (
                c_str_to_str(ciphertext_b64),
                c_str_to_str(nonce_b64),
                key_from_c(key_b64),
            )
        };
        let (Some(ciphertext), Some(nonce), Some(key)) = args else {
            return ptr::null_mut();
        };
        match decrypt_message(ciphertext, nonce, &key) {
            Ok(message) => string_to_c(message),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Decrypt a message with the key supplied as raw bytes instead of base64.
///
/// # Safety
/// `ciphertext_b64` and `nonce_b64` must be NULL or valid NUL-terminated
/// strings; `key_ptr`, when non-NULL, must be valid for reads of `key_len`
/// bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_message_with_key_bytes(
    ciphertext_b64: *const c_char,
    nonce_b64: *const c_char,
    key_ptr: *const u8,
    key_len: usize,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let args = unsafe {
            (
                c_str_to_str(ciphertext_b64),
                c_str_to_str(nonce_b64),
                key_from_raw(key_ptr, key_len),
            )
        };
        let (Some(ciphertext), Some(nonce), Some(key)) = args else {
            return ptr::null_mut();
        };
        match decrypt_message(ciphertext, nonce, &key) {
            Ok(message) => string_to_c(message),
            Err(_) => ptr::null_mut(),
        }
    })
}

// ---------------------------------------------------------------------------
// File encryption
// ---------------------------------------------------------------------------

/// Encrypt raw file bytes. Release with `ren_free_encrypted_file`.
///
/// NULL `filename`/`mimetype` are treated as empty strings; NULL `data` or
/// `key_b64` fails.
///
/// # Safety
/// `data`, when non-NULL, must be valid for reads of `len` bytes; the string
/// arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_encrypt_file(
    data: *const u8,
    len: usize,
    filename: *const c_char,
    mimetype: *const c_char,
    key_b64: *const c_char,
) -> RenEncryptedFile {
    ffi_catch(RenEncryptedFile::empty(), || {
        if data.is_null() {
            return RenEncryptedFile::empty();
        }
        let bytes = unsafe { slice::from_raw_parts(data, len) };
        let filename = unsafe { c_str_to_str(filename) }.unwrap_or("");
        let mimetype = unsafe { c_str_to_str(mimetype) }.unwrap_or("");
        let Some(key) = (unsafe { key_from_c(key_b64) }) else {
            return RenEncryptedFile::empty();
        };
        match encrypt_file(bytes, filename, mimetype, &key) {
            Ok(enc) => RenEncryptedFile {
                ciphertext: string_to_c(enc.ciphertext),
                nonce: string_to_c(enc.nonce),
                filename: string_to_c(enc.filename),
                mimetype: string_to_c(enc.mimetype),
            },
            Err(_) => RenEncryptedFile::empty(),
        }
    })
}

/// Decrypt a file from base64 ciphertext. The plaintext bytes are returned
/// as an owned buffer with the length written to `out_len`; release with
/// `ren_free_bytes`.
///
/// # Safety
/// The string arguments must be NULL or valid NUL-terminated strings;
/// `out_len` must point to a writeable `usize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_file(
    ciphertext_b64: *const c_char,
    nonce_b64: *const c_char,
    key_b64: *const c_char,
    out_len: *mut usize,
) -> *mut u8 {
    ffi_catch(ptr::null_mut(), || {
        if out_len.is_null() {
            return ptr::null_mut();
        }
        let args = unsafe {
            (
                c_str_to_str(ciphertext_b64),
                c_str_to_str(nonce_b64),
                key_from_c(key_b64),
            )
        };
        let (Some(ciphertext), Some(nonce), Some(key)) = args else {
            return ptr::null_mut();
        };
        match decrypt_file(ciphertext, nonce, &key) {
            Ok(bytes) => unsafe { bytes_to_c(bytes, out_len) },
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Decrypt a file from raw ciphertext bytes (no base64 decode of the
/// payload). Release the returned buffer with `ren_free_bytes`.
///
/// # Safety
/// `ciphertext_ptr`, when non-NULL, must be valid for reads of
/// `ciphertext_len` bytes; the string arguments must be NULL or valid
/// NUL-terminated strings; `out_len` must point to a writeable `usize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_file_raw(
    ciphertext_ptr: *const u8,
    ciphertext_len: usize,
    nonce_b64: *const c_char,
    key_b64: *const c_char,
    out_len: *mut usize,
) -> *mut u8 {
    ffi_catch(ptr::null_mut(), || {
        if out_len.is_null() || ciphertext_ptr.is_null() {
            return ptr::null_mut();
        }
        let ciphertext = unsafe { slice::from_raw_parts(ciphertext_ptr, ciphertext_len) };
        let args = unsafe { (c_str_to_str(nonce_b64), key_from_c(key_b64)) };
        let (Some(nonce), Some(key)) = args else {
            return ptr::null_mut();
        };
        match decrypt_file_raw(ciphertext, nonce, &key) {
            Ok(bytes) => unsafe { bytes_to_c(bytes, out_len) },
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Variant of `ren_decrypt_file_raw` with the key supplied as raw bytes.
///
/// # Safety
/// Pointer arguments follow the same contracts as `ren_decrypt_file_raw`
/// and `ren_decrypt_message_with_key_bytes`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_file_raw_with_key_bytes(
    ciphertext_ptr: *const u8,
    ciphertext_len: usize,
    nonce_b64: *const c_char,
    key_ptr: *const u8,
    key_len: usize,
    out_len: *mut usize,
) -> *mut u8 {
    ffi_catch(ptr::null_mut(), || {
        if out_len.is_null() || ciphertext_ptr.is_null() {
            return ptr::null_mut();
        }
        let ciphertext = unsafe { slice::from_raw_parts(ciphertext_ptr, ciphertext_len) };
        let args = unsafe { (c_str_to_str(nonce_b64), key_from_raw(key_ptr, key_len)) };
        let (Some(nonce), Some(key)) = args else {
            return ptr::null_mut();
        };
        match decrypt_file_raw(ciphertext, nonce, &key) {
            Ok(bytes) => unsafe { bytes_to_c(bytes, out_len) },
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Encrypt a file together with a caption message under one nonce. Release
/// with `ren_free_encrypted_file_with_message`.
///
/// # Safety
/// `data`, when non-NULL, must be valid for reads of `len` bytes; the string
/// arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_encrypt_file_with_message(
    data: *const u8,
    len: usize,
    message: *const c_char,
    filename: *const c_char,
    mimetype: *const c_char,
    key_b64: *const c_char,
) -> RenEncryptedFileWithMessage {
    ffi_catch(RenEncryptedFileWithMessage::empty(), || {
        if data.is_null() {
            return RenEncryptedFileWithMessage::empty();
        }
        let bytes = unsafe { slice::from_raw_parts(data, len) };
        let Some(message) = (unsafe { c_str_to_str(message) }) else {
            return RenEncryptedFileWithMessage::empty();
        };
        let filename = unsafe { c_str_to_str(filename) }.unwrap_or("");
        let mimetype = unsafe { c_str_to_str(mimetype) }.unwrap_or("");
        let Some(key) = (unsafe { key_from_c(key_b64) }) else {
            return RenEncryptedFileWithMessage::empty();
        };
        match encrypt_file_with_message(bytes, message, &key, filename, mimetype) {
            Ok(enc) => RenEncryptedFileWithMessage {
                enc_file: string_to_c(enc.enc_file),
                ciphertext: string_to_c(enc.ciphertext),
                nonce: string_to_c(enc.nonce),
                filename: string_to_c(enc.filename),
                mimetype: string_to_c(enc.mimetype),
            },
            Err(_) => RenEncryptedFileWithMessage::empty(),
        }
    })
}

/// Decrypt a file and its caption message sealed by
/// `ren_encrypt_file_with_message`. Release with `ren_free_decrypted_file`.
///
/// # Safety
/// All arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_decrypt_file_with_message(
    enc_file_b64: *const c_char,
    ciphertext_b64: *const c_char,
    nonce_b64: *const c_char,
    key_b64: *const c_char,
    filename: *const c_char,
    mimetype: *const c_char,
) -> RenDecryptedFile {
    ffi_catch(RenDecryptedFile::empty(), || {
        let args = unsafe {
            (
                c_str_to_str(enc_file_b64),
                c_str_to_str(ciphertext_b64),
                c_str_to_str(nonce_b64),
                key_from_c(key_b64),
            )
        };
        let (Some(enc_file), Some(ciphertext), Some(nonce), Some(key)) = args else {
            return RenDecryptedFile::empty();
        };
        let filename = unsafe { c_str_to_str(filename) }.unwrap_or("");
        let mimetype = unsafe { c_str_to_str(mimetype) }.unwrap_or("");
        match decrypt_file_with_message(enc_file, ciphertext, nonce, &key, filename, mimetype) {
            Ok(dec) => {
                let mut len = 0usize;
                let data = unsafe { bytes_to_c(dec.file, &mut len) };
                RenDecryptedFile {
                    data,
                    len,
                    filename: string_to_c(dec.filename),
                    mimetype: string_to_c(dec.mimetype),
                    message: string_to_c(dec.message),
                }
            }
            Err(_) => RenDecryptedFile::empty(),
        }
    })
}

// ---------------------------------------------------------------------------
// Key wrapping
// ---------------------------------------------------------------------------

/// Wrap a symmetric key for the holder of `receiver_public_key_b64`.
/// Release with `ren_free_wrapped_key`.
///
/// # Safety
/// Both arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_wrap_symmetric_key(
    key_b64: *const c_char,
    receiver_public_key_b64: *const c_char,
) -> RenWrappedKey {
    ffi_catch(RenWrappedKey::empty(), || {
        let args = unsafe { (key_from_c(key_b64), c_str_to_str(receiver_public_key_b64)) };
        let (Some(key), Some(receiver_pk)) = args else {
            return RenWrappedKey::empty();
        };
        match wrap_symmetric_key(&key, receiver_pk) {
            Ok(wrapped) => RenWrappedKey {
                wrapped_key: string_to_c(wrapped.wrapped_key),
                ephemeral_public_key: string_to_c(wrapped.ephemeral_public_key),
                nonce: string_to_c(wrapped.nonce),
            },
            Err(_) => RenWrappedKey::empty(),
        }
    })
}

/// Unwrap a symmetric key; returns it as an owned base64 string.
///
/// # Safety
/// All arguments must be NULL or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_unwrap_symmetric_key(
    wrapped_key_b64: *const c_char,
    ephemeral_public_key_b64: *const c_char,
    nonce_b64: *const c_char,
    receiver_private_key_b64: *const c_char,
) -> *mut c_char {
    ffi_catch(ptr::null_mut(), || {
        let args = unsafe {
            (
                c_str_to_str(wrapped_key_b64),
                c_str_to_str(ephemeral_public_key_b64),
                c_str_to_str(nonce_b64),
                c_str_to_str(receiver_private_key_b64),
            )
        };
        let (Some(wrapped), Some(eph_pk), Some(nonce), Some(receiver_sk)) = args else {
            return ptr::null_mut();
        };
        match unwrap_symmetric_key(wrapped, eph_pk, nonce, receiver_sk) {
            Ok(key) => string_to_c(key.to_b64()),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Unwrap a symmetric key; returns the raw key bytes as an owned buffer with
/// the length written to `out_len`. Release with `ren_free_bytes`.
///
/// # Safety
/// The string arguments must be NULL or valid NUL-terminated strings;
/// `out_len` must point to a writeable `usize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ren_unwrap_symmetric_key_bytes(
    wrapped_key_b64: *const c_char,
    ephemeral_public_key_b64: *const c_char,
    nonce_b64: *const c_char,
    receiver_private_key_b64: *const c_char,
    out_len: *mut usize,
) -> *mut u8 {
    ffi_catch(ptr::null_mut(), || {
        if out_len.is_null() {
            return ptr::null_mut();
        }
        let args = unsafe {
            (
                c_str_to_str(wrapped_key_b64),
                c_str_to_str(ephemeral_public_key_b64),
                c_str_to_str(nonce_b64),
                c_str_to_str(receiver_private_key_b64),
            )
        };
        let (Some(wrapped), Some(eph_pk), Some(nonce), Some(receiver_sk)) = args else {
            return ptr::null_mut();
        };
        match unwrap_symmetric_key(wrapped, eph_pk, nonce, receiver_sk) {
            Ok(key) => unsafe { bytes_to_c(key.to_bytes().to_vec(), out_len) },
            Err(_) => ptr::null_mut(),
        }
    })
}
