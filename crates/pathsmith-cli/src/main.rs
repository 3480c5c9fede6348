//! PathSmith CLI
//!
//! Reports whether the Convex, Inkeep and Daytona integrations are set up.

mod cli;
mod commands;
mod error;
mod render;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Dotenv files sit next to the project, so they are resolved against
    // `--root`. They only fill settings that flags and the environment left unset.
    let dotenv = pathsmith_core::load_dotenv(&cli.root);
    for warning in &dotenv.warnings {
        tracing::warn!("{}", warning);
    }
    for path in &dotenv.loaded {
        tracing::debug!(path = %path.display(), "loaded dotenv file");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(execute_command(&cli))
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match cli.command.clone().unwrap_or(Commands::Status { no_concept: false }) {
        Commands::Status { no_concept } => {
            commands::run_status(&cli.context(), !no_concept).await?;
            Ok(())
        }
        Commands::Tasks => {
            commands::run_tasks(&cli.settings()).await?;
            Ok(())
        }
    }
}
