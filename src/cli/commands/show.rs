//! `passc show` — decrypt and print every item.

use crate::cli::output;
use crate::cli::{resolve_config, unlock, Cli};
use crate::errors::{PasscError, Result};
use crate::vault::items::{pretty_item, split_items};

/// Execute the `show` command.
pub fn execute(cli: &Cli, raw: bool) -> Result<()> {
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

    if raw {
        println!("{}", plaintext.as_str());
        return Ok(());
    }

    for (index, item) in split_items(&plaintext, &store.config().separator)
        .into_iter()
        .enumerate()
    {
        match pretty_item(index, item) {
            Ok(pretty) => println!("{pretty}"),
            // Items are opaque to the vault; show what is stored.
            Err(_) => println!("{item}"),
        }
    }

    Ok(())
}
