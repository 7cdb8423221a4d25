//! Search command implementation.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use gemeentekaart::Config;
use gemeentekaart::snapshot::UNKNOWN_PROVINCE;

use super::common::load_input;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Overpass JSON response (`-` for stdin)
    pub input: PathBuf,

    /// Municipality name (case-insensitive)
    pub name: String,
}

/// Execute the search command.
pub fn cmd_search(args: &SearchArgs, config: &Config) -> Result<()> {
    let snapshot = load_input(&args.input, config)?;

    let Some(feature) = snapshot.find_by_name(&args.name) else {
        bail!("not found: {}", args.name.trim());
    };

    println!("id:       {}", feature.id);
    println!("name:     {}", feature.name().unwrap_or_default());
    println!(
        "province: {}",
        feature.tag(&config.province_tag).unwrap_or(UNKNOWN_PROVINCE)
    );
    println!("geometry: {}", feature.geometry.type_name());
    if let Some(b) = feature.bounds() {
        println!(
            "bounds:   {:.5},{:.5} {:.5},{:.5}",
            b.min_x, b.min_y, b.max_x, b.max_y
        );
    }
    Ok(())
}
