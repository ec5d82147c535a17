use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::crypto::KeyMode;
use crate::errors::{PasscError, Result};
use crate::vault::items::{separator_is_json_safe, DEFAULT_SEPARATOR};
use crate::vault::StoreConfig;

/// User configuration, loaded from `<data dir>/config.toml`.
///
/// Every field has a sensible default so passc works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file name (relative paths resolve against the data dir).
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Backup file name (relative paths resolve against the data dir).
    #[serde(default = "default_backup_file")]
    pub backup_file: String,

    /// Export file name (relative paths resolve against the working dir).
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// String placed between items in the decrypted plaintext.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// How the master password becomes the cipher key.
    #[serde(default)]
    pub key_mode: KeyMode,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "vault.passc".to_string()
}

fn default_backup_file() -> String {
    "vault.passc.bak".to_string()
}

fn default_export_file() -> String {
    "passc_export.json".to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            backup_file: default_backup_file(),
            export_file: default_export_file(),
            separator: default_separator(),
            key_mode: KeyMode::default(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the data directory.
    const FILE_NAME: &'static str = "config.toml";

    /// Load settings from `<data_dir>/config.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| PasscError::file("read", &config_path, e))?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PasscError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the vault cannot work with.
    ///
    /// A separator that could appear inside JSON is allowed but logged.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(PasscError::ConfigError(
                "separator cannot be empty".into(),
            ));
        }
        if !separator_is_json_safe(&self.separator) {
            warn!(
                separator = ?self.separator,
                "separator has no control character and may collide with item contents"
            );
        }
        for (field, value) in [
            ("vault_file", &self.vault_file),
            ("backup_file", &self.backup_file),
            ("export_file", &self.export_file),
        ] {
            if value.trim().is_empty() {
                return Err(PasscError::ConfigError(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Resolve file names into a `StoreConfig`.
    ///
    /// Vault and backup paths are relative to `data_dir`, the export path
    /// to `cwd`.  Absolute paths are kept unchanged.
    pub fn store_config(&self, data_dir: &Path, cwd: &Path) -> StoreConfig {
        StoreConfig {
            vault_path: data_dir.join(&self.vault_file),
            backup_path: data_dir.join(&self.backup_file),
            export_path: cwd.join(&self.export_file),
            separator: self.separator.clone(),
        }
    }
}

/// Default data directory: `~/.passc`.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".passc"))
        .ok_or_else(|| PasscError::ConfigError("could not determine home directory".into()))
}

// ── Tests ────────────────────────────────────────────────────────────
