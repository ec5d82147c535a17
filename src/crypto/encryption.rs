//! AES-GCM authenticated encryption of the vault blob.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `open` splits the nonce back out
//! before decrypting.
//!
//! Layout of a sealed blob:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! The AES width follows the key length: 16 bytes selects AES-128-GCM,
//! 24 bytes AES-192-GCM and 32 bytes AES-256-GCM.

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce, OsRng};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};

use crate::errors::{PasscError, Result};

/// AES-192 in GCM mode with the standard 96-bit nonce.
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Size of the GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Key lengths accepted by `seal` and `open`.
pub const SUPPORTED_KEY_LENS: [usize; 3] = [16, 24, 32];

/// Returns `true` if `len` selects one of the AES-GCM variants.
pub fn is_supported_key_len(len: usize) -> bool {
    SUPPORTED_KEY_LENS.contains(&len)
}

/// Encrypt and authenticate `plaintext` under `key`.
///
/// Returns `nonce || ciphertext`.  No associated data is bound.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => seal_with::<Aes128Gcm>(key, plaintext),
        24 => seal_with::<Aes192Gcm>(key, plaintext),
        32 => seal_with::<Aes256Gcm>(key, plaintext),
        other => Err(PasscError::InvalidKeyLength(other)),
    }
}

/// Authenticate and decrypt a blob produced by `seal`.
///
/// Empty input is rejected before any split, and a blob shorter than the
/// nonce is rejected without slicing.
pub fn open(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if !is_supported_key_len(key.len()) {
        return Err(PasscError::InvalidKeyLength(key.len()));
    }
    if blob.is_empty() {
        return Err(PasscError::EmptyInput);
    }

    match key.len() {
        16 => open_with::<Aes128Gcm>(key, blob),
        24 => open_with::<Aes192Gcm>(key, blob),
        _ => open_with::<Aes256Gcm>(key, blob),
    }
}

fn seal_with<C>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: KeyInit + Aead + AeadCore,
{
    let cipher = C::new_from_slice(key).map_err(|_| PasscError::InvalidKeyLength(key.len()))?;

    // A new nonce for every seal; the key is long-lived.
    let nonce = C::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PasscError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(nonce.len() + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

fn open_with<C>(key: &[u8], blob: &[u8]) -> Result<Vec<u8>>
where
    C: KeyInit + Aead + AeadCore,
{
    let nonce_len = C::NonceSize::USIZE;
    if blob.len() < nonce_len {
        return Err(PasscError::TruncatedCiphertext(blob.len()));
    }

    let (nonce_bytes, ciphertext) = blob.split_at(nonce_len);
    let nonce = Nonce::<C>::from_slice(nonce_bytes);

    let cipher = C::new_from_slice(key).map_err(|_| PasscError::InvalidKeyLength(key.len()))?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PasscError::DecryptionFailed)
}
