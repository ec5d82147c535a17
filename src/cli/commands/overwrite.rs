//! `passc overwrite` — replace the whole vault with a single item.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{read_item, resolve_config, unlock, validate_item, Cli};
use crate::errors::{PasscError, Result};

/// Execute the `overwrite` command.
pub fn execute(cli: &Cli, item: Option<&str>, force: bool) -> Result<()> {
    let (settings, config) = resolve_config(cli)?;

    let item = read_item(item)?;
    validate_item(&item, &config.separator)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Replace every item in the vault?")
            .default(false)
            .interact()
            .map_err(|e| PasscError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let store = unlock(&settings, config)?;

    if store.path().exists() {
        store.backup();
    }

    store.write(&item, false)?;

    output::success(&format!("Vault replaced at {}", store.path().display()));

    Ok(())
}
