//! Table command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use gemeentekaart::Config;

use super::common::load_input;

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Overpass JSON response (`-` for stdin)
    pub input: PathBuf,
}

/// Execute the table command.
pub fn cmd_table(args: &TableArgs, config: &Config) -> Result<()> {
    let snapshot = load_input(&args.input, config)?;

    for group in snapshot.provinces() {
        println!("{} ({})", group.province, group.features.len());
        for feature in group.features {
            println!("  {:<30} {}", feature.name().unwrap_or(""), feature.id);
        }
    }
    Ok(())
}
