//! Master key handling.
//!
//! The master password becomes the AES key in one of two ways:
//! - `KeyMode::Raw`: the password bytes are the key, so the password
//!   must be exactly 16, 24 or 32 bytes long.
//! - `KeyMode::Sha256`: the password is hashed with SHA-256 and the
//!   32-byte digest is the key.  Any password length works.
//!
//! Neither mode is a slow KDF.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encryption::is_supported_key_len;
use crate::errors::{PasscError, Result};

/// How the master password is turned into key bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Use the password bytes verbatim.
    #[default]
    Raw,
    /// Use SHA-256(password).
    Sha256,
}

/// Cipher key bytes that are zeroed when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    bytes: Vec<u8>,
}

impl MasterKey {
    /// Wrap raw key bytes, rejecting lengths AES-GCM cannot use.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if !is_supported_key_len(bytes.len()) {
            let len = bytes.len();
            let mut bytes = bytes;
            bytes.zeroize();
            return Err(PasscError::InvalidKeyLength(len));
        }
        Ok(Self { bytes })
    }

    /// Build a key from a password according to `mode`.
    pub fn from_password(password: &[u8], mode: KeyMode) -> Result<Self> {
        match mode {
            KeyMode::Raw => Self::new(password.to_vec()),
            KeyMode::Sha256 => {
                let mut digest = Sha256::digest(password);
                let key = Self::new(digest.to_vec());
                digest.as_mut_slice().zeroize();
                key
            }
        }
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; an empty key is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MasterKey({} bytes)", self.bytes.len())
    }
}
