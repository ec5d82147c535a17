//! `passc backup` — copy the encrypted vault file to the backup path.
//!
//! No password is needed: the copy never decrypts.

use crate::cli::output;
use crate::cli::{resolve_config, Cli};
use crate::errors::{PasscError, Result};
use crate::vault::backup_file;

/// Execute the `backup` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, config) = resolve_config(cli)?;

    if !config.vault_path.exists() {
        return Err(PasscError::CommandFailed(format!(
            "no vault at {} to back up",
            config.vault_path.display()
        )));
    }

    if backup_file(&config) {
        output::success(&format!("Backup written to {}", config.backup_path.display()));
    } else {
        output::warning("Backup failed — run with --verbose for details.");
    }

    Ok(())
}
