//! `passc export` — write all items as a readable JSON array.

use std::path::Path;

use crate::cli::output;
use crate::cli::{resolve_config, unlock, Cli};
use crate::errors::{PasscError, Result};

/// Execute the `export` command.
pub fn execute(cli: &Cli, output_path: Option<&Path>) -> Result<()> {
    let (settings, mut config) = resolve_config(cli)?;

    if let Some(dest) = output_path {
        config.export_path = dest.to_path_buf();
    }

    // Safety: refuse to export over the vault or its backup.
    if config.export_path == config.vault_path || config.export_path == config.backup_path {
        return Err(PasscError::CommandFailed(
            "refusing to export over the vault or its backup".into(),
        ));
    }

    let store = unlock(&settings, config)?;
    let count = store.export()?;

    output::success(&format!(
        "Exported {} item(s) to {}",
        count,
        store.config().export_path.display()
    ));
    output::warning("The export file is unencrypted — delete it when done.");

    Ok(())
}
