use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use passc::cli::commands;
use passc::cli::output;
use passc::cli::{Cli, Commands};
use passc::errors::PasscError;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `show` output stays clean.
    let filter = EnvFilter::try_from_env("PASSC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("passc=debug")
        } else {
            EnvFilter::new("passc=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = match cli.command {
        Commands::Add { ref item } => commands::add::execute(&cli, item.as_deref()),
        Commands::Overwrite { ref item, force } => {
            commands::overwrite::execute(&cli, item.as_deref(), force)
        }
        Commands::Show { raw } => commands::show::execute(&cli, raw),
        Commands::List => commands::list::execute(&cli),
        Commands::Export { ref output } => commands::export::execute(&cli, output.as_deref()),
        Commands::Backup => commands::backup::execute(&cli),
        Commands::Clear { force } => commands::clear::execute(&cli, force),
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        let hint = match &e {
            PasscError::EmptyVault(_) => Some("run: passc add '<JSON>'"),
            PasscError::DecryptionFailed => Some("check the master password (PASSC_PASSWORD)"),
            PasscError::InvalidKeyLength(_) => {
                Some("use a 16, 24, or 32 byte password, or key_mode = \"sha256\"")
            }
            PasscError::MalformedVault { .. } => Some("restore the vault from its backup"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = hint {
            output::tip(hint);
        }
        std::process::exit(1);
    }
}
