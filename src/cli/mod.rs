//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::{default_data_dir, Settings};
use crate::crypto::MasterKey;
use crate::errors::{PasscError, Result};
use crate::vault::{StoreConfig, VaultStore};

/// passc CLI: encrypted credential vault.
#[derive(Parser)]
#[command(name = "passc", about = "Encrypted credential vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the vault and config.toml (default: ~/.passc)
    #[arg(long, env = "PASSC_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a JSON item to the vault (newest first)
    Add {
        /// Item as a JSON document (omit to read stdin or prompt)
        item: Option<String>,
    },

    /// Replace the whole vault with a single JSON item
    Overwrite {
        /// Item as a JSON document (omit to read stdin or prompt)
        item: Option<String>,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print every item in the vault
    Show {
        /// Print the decrypted plaintext exactly as stored
        #[arg(long)]
        raw: bool,
    },

    /// List items in a table
    List,

    /// Export all items as a readable JSON array
    Export {
        /// Output file path (default: export_file from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy the encrypted vault file to the backup path
    Backup,

    /// Remove every item from the vault
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the data directory: `--dir` / `PASSC_DIR`, else `~/.passc`.
pub fn data_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir(),
    }
}

/// Load settings and resolve them into a `StoreConfig`.
pub fn resolve_config(cli: &Cli) -> Result<(Settings, StoreConfig)> {
    let dir = data_dir(cli)?;
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&dir)?;
    let config = settings.store_config(&dir, &cwd);
    Ok((settings, config))
}

/// Get the master password, trying in order:
/// 1. `PASSC_PASSWORD` env var (scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSC_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| PasscError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for the password and build a `VaultStore` over `config`.
pub fn unlock(settings: &Settings, config: StoreConfig) -> Result<VaultStore> {
    let password = prompt_password()?;
    debug!(key_mode = ?settings.key_mode, "unlocking {}", config.vault_path.display());

    let key = MasterKey::from_password(password.as_bytes(), settings.key_mode)?;
    Ok(VaultStore::with_key(key, config))
}

/// Read an item from the argument, piped stdin, or an interactive prompt.
pub fn read_item(item: Option<&str>) -> Result<String> {
    if let Some(v) = item {
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Input::<String>::new()
        .with_prompt("Item (JSON)")
        .interact_text()
        .map_err(|e| PasscError::CommandFailed(format!("input prompt: {e}")))
}

/// Check that an item is a JSON document that can be framed with
/// `separator`.
pub fn validate_item(item: &str, separator: &str) -> Result<()> {
    if item.trim().is_empty() {
        return Err(PasscError::CommandFailed("item cannot be empty".into()));
    }

    serde_json::from_str::<serde::de::IgnoredAny>(item)
        .map_err(|source| PasscError::InvalidItem { index: 0, source })?;

    if item.contains(separator) {
        return Err(PasscError::CommandFailed(
            "item contains the vault separator".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::DEFAULT_SEPARATOR;

    #[test]
    fn valid_items() {
        assert!(validate_item(r#"{"site":"example.com"}"#, DEFAULT_SEPARATOR).is_ok());
        assert!(validate_item("[1,2,3]", DEFAULT_SEPARATOR).is_ok());
        assert!(validate_item("\"just a string\"", DEFAULT_SEPARATOR).is_ok());
    }

    #[test]
    fn rejects_empty_item() {
        assert!(validate_item("", DEFAULT_SEPARATOR).is_err());
        assert!(validate_item("   ", DEFAULT_SEPARATOR).is_err());
    }

    #[test]
    fn rejects_non_json_item() {
        let err = validate_item("user=alice", DEFAULT_SEPARATOR).unwrap_err();
        assert!(matches!(err, PasscError::InvalidItem { .. }));
    }

    #[test]
    fn rejects_item_containing_custom_separator() {
        assert!(validate_item(r#"{"a":"x|y"}"#, "|").is_err());
    }

    #[test]
    fn cli_parses_add_with_dir() {
        let cli = Cli::try_parse_from(["passc", "--dir", "/tmp/v", "add", "{}"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/v")));
        assert!(matches!(cli.command, Commands::Add { item: Some(ref i) } if i == "{}"));
    }
}
