//! Diff command

use clap::Args;
use rowdelta_core::{apply_change_set, compute_changes, render_summary};
use serde_json::Value;
use std::path::PathBuf;

use super::{read_json, OutputFormat};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// JSON array with the rows currently shown
    #[arg(long)]
    pub initial: PathBuf,

    /// JSON array with the freshly fetched rows
    #[arg(long)]
    pub updated: PathBuf,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Apply the change set and fail unless it rebuilds the updated rows
    #[arg(long)]
    pub verify: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let initial: Vec<Value> = read_json(&args.initial)?;
    let updated: Vec<Value> = read_json(&args.updated)?;

    let changes = compute_changes(&initial, &updated);

    match args.format {
        OutputFormat::Text => println!("{}", render_summary(&changes)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
    }

    if args.verify {
        let rows = apply_change_set(&initial, &updated, &changes)?;
        if rows != updated {
            return Err("Change set does not reconstruct the updated rows".into());
        }
        eprintln!("Verified: change set reconstructs {} rows", rows.len());
    }

    Ok(())
}
