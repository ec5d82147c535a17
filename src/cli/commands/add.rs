//! `passc add` — prepend a JSON item to the vault.

use crate::cli::output;
use crate::cli::{read_item, resolve_config, unlock, validate_item, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, item: Option<&str>) -> Result<()> {
    let (settings, config) = resolve_config(cli)?;

    let item = read_item(item)?;
    validate_item(&item, &config.separator)?;

    let store = unlock(&settings, config)?;

    // Snapshot the current vault before changing it.
    if store.path().exists() {
        store.backup();
    }

    store.write(&item, true)?;

    output::success(&format!("Item added to {}", store.path().display()));
    output::tip("Run `passc show` to see all items.");

    Ok(())
}
