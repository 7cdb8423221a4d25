//! Convert command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use gemeentekaart::{Config, FeatureCollection};

use super::common::{load_input, write_json};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Overpass JSON response (`-` for stdin)
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the convert command.
pub fn cmd_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let snapshot = load_input(&args.input, config)?;
    let collection = FeatureCollection::new(snapshot.features());
    write_json(&collection, args.output.as_deref())
}
