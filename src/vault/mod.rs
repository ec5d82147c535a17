//! Vault module — the encrypted item store.
//!
//! This module provides:
//! - Item framing, pretty-printing and export rendering (`items`)
//! - `VaultStore` and its `StoreConfig` for clear/write/read/export/backup (`store`)

pub mod items;
pub mod store;

// Re-export the most commonly used items.
pub use items::DEFAULT_SEPARATOR;
pub use store::{backup_file, clear_file, StoreConfig, VaultStore};
