use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in passc.
#[derive(Debug, Error)]
pub enum PasscError {
    // --- Key errors ---
    #[error("Invalid master key length: {0} bytes (must be 16, 24, or 32)")]
    InvalidKeyLength(usize),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong password or corrupted vault")]
    DecryptionFailed,

    #[error("Nothing to decrypt — input is empty")]
    EmptyInput,

    #[error("Ciphertext too short: {0} bytes is smaller than the nonce")]
    TruncatedCiphertext(usize),

    // --- Vault errors ---
    #[error("Vault at {0} is empty — no secrets stored yet")]
    EmptyVault(PathBuf),

    #[error("Malformed vault at {path}: {len} bytes is too short to hold a nonce")]
    MalformedVault { path: PathBuf, len: usize },

    #[error("Vault contents are not valid UTF-8")]
    InvalidPlaintext,

    #[error("Item {index} is not valid JSON: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    // --- IO errors ---
    #[error("Failed to {action} {}: {source}", path.display())]
    FileAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl PasscError {
    /// Wrap an IO error with the action and path it happened on.
    pub fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for passc results.
pub type Result<T> = std::result::Result<T, PasscError>;
