//! End-to-end round trips through the public API, the way the mobile app
//! drives it: derive or generate a key, encrypt on one side, decrypt on the
//! other.

use ren_crypto::{
    AeadKey, decrypt_data, decrypt_file, decrypt_file_with_message, decrypt_message,
    derive_key_from_password, derive_key_from_string, encrypt_data, encrypt_file,
    encrypt_file_with_message, encrypt_message, generate_key_pair, generate_message_key,
    generate_salt, unwrap_symmetric_key, wrap_symmetric_key,
};

const MESSAGE: &str = "the eagle lands at midnight";

#[test]
fn data_round_trip_with_password_key() {
    let salt = generate_salt();
    let key = derive_key_from_password("correct horse battery staple", &salt).unwrap();

    let combined = encrypt_data(MESSAGE, &key).unwrap();
    assert_eq!(decrypt_data(&combined, &key).unwrap(), MESSAGE);

    // A key re-derived from the same credentials decrypts the same blob.
    let rederived = derive_key_from_password("correct horse battery staple", &salt).unwrap();
    assert_eq!(decrypt_data(&combined, &rederived).unwrap(), MESSAGE);
}

#[test]
fn data_round_trip_with_string_key() {
    let key = derive_key_from_string("session-secret-7f3a");
    let combined = encrypt_data(MESSAGE, &key).unwrap();
    assert_eq!(decrypt_data(&combined, &key).unwrap(), MESSAGE);
}

#[test]
fn message_round_trip() {
    let key = generate_message_key();
    let enc = encrypt_message(MESSAGE, &key).unwrap();
    assert_eq!(decrypt_message(&enc.ciphertext, &enc.nonce, &key).unwrap(), MESSAGE);
}

#[test]
fn each_encryption_uses_a_fresh_nonce() {
    let key = generate_message_key();
    let a = encrypt_message(MESSAGE, &key).unwrap();
    let b = encrypt_message(MESSAGE, &key).unwrap();
    assert_ne!(a.nonce, b.nonce);
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn file_round_trip() {
    let key = generate_message_key();
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let enc = encrypt_file(&payload, "report.pdf", "application/pdf", &key).unwrap();
    let dec = decrypt_file(&enc.ciphertext, &enc.nonce, &key).unwrap();
    assert_eq!(dec, payload);
}

#[test]
fn file_with_message_round_trip() {
    let key = generate_message_key();
    let enc = encrypt_file_with_message(b"\x89PNG\r\n", "holiday photo", &key, "p.png", "image/png")
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
    assert_eq!(dec.file, b"\x89PNG\r\n");
    assert_eq!(dec.message, "holiday photo");
}

#[test]
fn wrapped_key_travels_between_parties() {
    // Sender encrypts a message with a fresh key, wraps the key for the
    // receiver, and the receiver unwraps and decrypts.
    let receiver = generate_key_pair();
    let message_key = generate_message_key();

    let enc = encrypt_message(MESSAGE, &message_key).unwrap();
    let envelope = wrap_symmetric_key(&message_key, &receiver.public_key).unwrap();

    let recovered = unwrap_symmetric_key(
        &envelope.wrapped_key,
        &envelope.ephemeral_public_key,
        &envelope.nonce,
        &receiver.private_key,
    )
    .unwrap();
    assert_eq!(
        decrypt_message(&enc.ciphertext, &enc.nonce, &recovered).unwrap(),
        MESSAGE
    );
}

#[test]
fn exported_key_survives_reimport() {
    let key = generate_message_key();
    let enc = encrypt_message(MESSAGE, &key).unwrap();

    let reimported = AeadKey::from_b64(&key.to_b64()).unwrap();
    assert_eq!(
        decrypt_message(&enc.ciphertext, &enc.nonce, &reimported).unwrap(),
        MESSAGE
    );
}
