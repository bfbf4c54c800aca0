use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

use crate::cli::{Cli, Commands};
use veritax_core::VeritaxError;

fn main() {
    // Initialize logging with VERITAX_LOG environment variable support
    let log_level = std::env::var("VERITAX_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<VeritaxError>() {
            Some(VeritaxError::Configuration(_)) => 2,
            Some(VeritaxError::Io(_)) => 3,
            Some(VeritaxError::Parse(_)) => 4,
            Some(VeritaxError::GraphIntegrity(_)) | Some(VeritaxError::Cycle(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Validate(args) => crate::cli::commands::validate::run(args),
        Commands::Check(args) => crate::cli::commands::check::run(args),
    }
}
