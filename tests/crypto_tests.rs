//! Integration tests for the passc crypto module.

use passc::crypto::{open, seal, KeyMode, MasterKey, NONCE_LEN, TAG_LEN};
use passc::errors::PasscError;

// ---------------------------------------------------------------------------
// Seal / open round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip_for_every_key_size() {
    let plaintext = br#"{"site":"example.com","user":"alice","password":"s3cret"}"#;

    for key in [vec![0x11u8; 16], vec![0x22u8; 24], vec![0x33u8; 32]] {
        let sealed = seal(&key, plaintext).expect("seal should succeed");
        assert_eq!(sealed.len(), NONCE_LEN + plaintext.len() + TAG_LEN);

        let recovered = open(&key, &sealed).expect("open should succeed");
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn seal_open_roundtrip_empty_plaintext() {
    let key = [0x44u8; 32];
    let sealed = seal(&key, b"").expect("seal");
    assert_eq!(sealed.len(), NONCE_LEN + TAG_LEN);
    assert!(open(&key, &sealed).expect("open").is_empty());
}

#[test]
fn seal_produces_fresh_nonce_each_time() {
    let key = [0xCDu8; 16];
    let plaintext = b"same plaintext";

    let ct1 = seal(&key, plaintext).expect("seal 1");
    let ct2 = seal(&key, plaintext).expect("seal 2");

    assert_ne!(
        &ct1[..NONCE_LEN],
        &ct2[..NONCE_LEN],
        "two seals must use different nonces"
    );
    assert_ne!(ct1, ct2, "two seals of the same plaintext must differ");
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn open_with_wrong_key_fails_auth() {
    let key = [0x11u8; 32];
    let wrong_key = [0x12u8; 32];

    let sealed = seal(&key, b"TOP_SECRET").expect("seal");
    let result = open(&wrong_key, &sealed);

    assert!(matches!(result, Err(PasscError::DecryptionFailed)));
}

#[test]
fn open_with_key_of_other_width_fails_auth() {
    let sealed = seal(&[0x11u8; 32], b"value").expect("seal");
    let result = open(&[0x11u8; 16], &sealed);
    assert!(matches!(result, Err(PasscError::DecryptionFailed)));
}

#[test]
fn flipping_any_ciphertext_byte_fails_auth() {
    let key = [0xBBu8; 24];
    let sealed = seal(&key, b"{\"a\":1}").expect("seal");

    for i in NONCE_LEN..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[i] ^= 0x01;
        assert!(
            matches!(open(&key, &tampered), Err(PasscError::DecryptionFailed)),
            "tampering byte {i} must be detected"
        );
    }
}

#[test]
fn flipping_a_nonce_byte_fails_auth() {
    let key = [0xBBu8; 32];
    let mut sealed = seal(&key, b"value").expect("seal");
    sealed[0] ^= 0x80;
    assert!(matches!(open(&key, &sealed), Err(PasscError::DecryptionFailed)));
}

#[test]
fn truncated_tag_fails_auth() {
    let key = [0x01u8; 16];
    let sealed = seal(&key, b"value").expect("seal");
    let result = open(&key, &sealed[..sealed.len() - 1]);
    assert!(matches!(result, Err(PasscError::DecryptionFailed)));
}

#[test]
fn open_empty_input_is_distinct_error() {
    let result = open(&[0xAAu8; 32], &[]);
    assert!(matches!(result, Err(PasscError::EmptyInput)));
}

#[test]
fn open_shorter_than_nonce_is_rejected() {
    let result = open(&[0xAAu8; 32], &[0u8; 5]);
    assert!(matches!(result, Err(PasscError::TruncatedCiphertext(5))));
}

#[test]
fn unsupported_key_lengths_are_rejected() {
    for len in [0usize, 1, 15, 17, 31, 33, 64] {
        let key = vec![0u8; len];
        assert!(matches!(
            seal(&key, b"x"),
            Err(PasscError::InvalidKeyLength(n)) if n == len
        ));
        assert!(matches!(
            open(&key, &[0u8; 40]),
            Err(PasscError::InvalidKeyLength(n)) if n == len
        ));
    }
}

// ---------------------------------------------------------------------------
// Master key modes
// ---------------------------------------------------------------------------

#[test]
fn raw_password_is_used_as_key() {
    let password = b"0123456789abcdef0123456789abcdef";
    let key = MasterKey::from_password(password, KeyMode::Raw).expect("raw key");
    assert_eq!(key.as_bytes(), password);

    let sealed = seal(key.as_bytes(), b"hello").expect("seal");
    assert_eq!(open(password, &sealed).expect("open"), b"hello");
}

#[test]
fn sha256_mode_keys_roundtrip() {
    let key = MasterKey::from_password(b"correct horse battery staple", KeyMode::Sha256)
        .expect("sha256 key");
    let sealed = seal(key.as_bytes(), b"hello").expect("seal");

    let again = MasterKey::from_password(b"correct horse battery staple", KeyMode::Sha256)
        .expect("sha256 key");
    assert_eq!(open(again.as_bytes(), &sealed).expect("open"), b"hello");

    let other = MasterKey::from_password(b"Tr0ub4dor&3", KeyMode::Sha256).expect("sha256 key");
    assert!(matches!(
        open(other.as_bytes(), &sealed),
        Err(PasscError::DecryptionFailed)
    ));
}
