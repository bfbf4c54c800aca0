pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "veritax",
    version,
    about = "Validate virus strain names against the NCBI Taxonomy",
    long_about = "Veritax resolves free-text virus strain names reported in study submissions \
                  against the NCBI Taxonomy reference, classifies whether each resolved name is \
                  truly a virus, and emits a validation verdict per name. Download the reference \
                  data from ftp://ftp.ncbi.nih.gov/pub/taxonomy/taxdmp.zip."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate reported/preferred strain name pairs from study records
    Validate(commands::validate::ValidateArgs),

    /// Check individual names and print one verdict per distinct value
    Check(commands::check::CheckArgs),
}
