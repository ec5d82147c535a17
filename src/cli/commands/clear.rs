//! `passc clear` — remove every item from the vault.
//!
//! `--force` skips both the confirmation and the password check, so a
//! vault that no longer decrypts can still be wiped.  The raw bytes are
//! always copied to the backup path first.

use dialoguer::Confirm;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{resolve_config, unlock, Cli};
use crate::errors::{PasscError, Result};
use crate::vault::{backup_file, clear_file};

/// Execute the `clear` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let (settings, config) = resolve_config(cli)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete every item in the vault?")
            .default(false)
            .interact()
            .map_err(|e| PasscError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }

        // Without --force only the key holder may wipe a readable vault.
        if config.vault_path.exists() {
            let store = unlock(&settings, config.clone())?;
            match store.read() {
                Ok(text) => drop(Zeroizing::new(text)),
                Err(PasscError::EmptyVault(_) | PasscError::MalformedVault { .. }) => {}
                Err(e) => return Err(e),
            }
        }
    }

    if config.vault_path.exists() {
        backup_file(&config);
    }

    clear_file(&config)?;

    output::success(&format!("Vault cleared at {}", config.vault_path.display()));
    output::tip(&format!(
        "The previous contents are in {}",
        config.backup_path.display()
    ));

    Ok(())
}
