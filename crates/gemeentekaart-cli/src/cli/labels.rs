//! Labels command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use gemeentekaart::{label_layer, AdaptiveSizing, Config};

use super::common::{load_input, write_json};

#[derive(Debug, Args)]
pub struct LabelsArgs {
    /// Overpass JSON response (`-` for stdin)
    pub input: PathBuf,

    /// Map zoom level
    #[arg(short, long)]
    pub zoom: f64,

    /// Characters per line (overrides the config)
    #[arg(short, long)]
    pub wrap: Option<usize>,

    /// Fit text size to each municipality
    #[arg(long)]
    pub adaptive: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the labels command.
pub fn cmd_labels(args: &LabelsArgs, config: &Config) -> Result<()> {
    let mut label_config = config.labels.clone();
    if let Some(wrap) = args.wrap {
        label_config.wrap_width = wrap;
    }
    if args.adaptive && label_config.adaptive.is_none() {
        label_config.adaptive = Some(AdaptiveSizing::default());
    }

    let snapshot = load_input(&args.input, config)?;
    let labels = label_layer(&snapshot, args.zoom, &label_config);
    if labels.is_empty() && args.zoom < label_config.min_zoom {
        eprintln!(
            "Labels are hidden below zoom {} (requested {})",
            label_config.min_zoom, args.zoom
        );
    }

    write_json(&labels, args.output.as_deref())
}
