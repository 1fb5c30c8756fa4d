//! rowdelta CLI
//!
//! Command-line interface for computing and checking row change sets

use clap::{Parser, Subcommand};
use rowdelta_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rowdelta")]
#[command(about = "rowdelta - Incremental list reconciliation", long_about = None)]
struct Cli {
    /// Logging profile: development, production or test
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two JSON array snapshots
    Diff(commands::diff::DiffArgs),
    /// Replay a filter transition over a favorites file
    Filter(commands::filter::FilterArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Filter(args) => commands::filter::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
