//! `passc list` — display all items in a table.

use crate::cli::output;
use crate::cli::{resolve_config, unlock, Cli};
use crate::errors::{PasscError, Result};
use crate::vault::items::split_items;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (settings, config) = resolve_config(cli)?;

    // A vault that was never written has nothing to unlock.
    if !config.vault_path.exists() {
        output::empty_vault();
        return Ok(());
    }

    let store = unlock(&settings, config)?;

    let plaintext = match store.read() {
        Ok(text) => zeroize::Zeroizing::new(text),
        Err(PasscError::EmptyVault(_)) => {
            output::empty_vault();
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let items = split_items(&plaintext, &store.config().separator);

    output::info(&format!(
        "{} — {} item(s)",
        store.path().display(),
        items.len()
    ));

    output::print_items_table(&items);

    Ok(())
}
