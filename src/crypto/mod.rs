//! Cryptographic primitives for passc.
//!
//! This module provides:
//! - AES-GCM sealing and opening of the vault blob (`encryption`)
//! - Master key handling and password-to-key modes (`keys`)

pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, MasterKey};
pub use encryption::{is_supported_key_len, open, seal, NONCE_LEN, TAG_LEN};
pub use keys::{KeyMode, MasterKey};
