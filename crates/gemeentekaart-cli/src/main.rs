//! gemeentekaart - convert and label cadastral municipality boundaries
//!
//! Usage:
//!   gemeentekaart convert <overpass.json> [-o out.geojson]   Build GeoJSON
//!   gemeentekaart labels <overpass.json> --zoom 14           Label layer as JSON
//!   gemeentekaart search <overpass.json> <name>              Find a municipality
//!   gemeentekaart table <overpass.json>                      List per province
//!
//! Pass `-` as the input to read from stdin.

mod cli;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use cli::{ConvertArgs, LabelsArgs, SearchArgs, TableArgs};

#[derive(Parser)]
#[command(name = "gemeentekaart")]
#[command(about = "Assemble and label Dutch cadastral municipality boundaries", long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an Overpass response to a GeoJSON FeatureCollection
    Convert(ConvertArgs),
    /// Compute label placements for a zoom level
    Labels(LabelsArgs),
    /// Look up a municipality by name
    Search(SearchArgs),
    /// List municipalities grouped by province
    Table(TableArgs),
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = cli::common::load_config(args.config.as_deref())?;

    match args.command {
        Command::Convert(cmd) => cli::cmd_convert(&cmd, &config),
        Command::Labels(cmd) => cli::cmd_labels(&cmd, &config),
        Command::Search(cmd) => cli::cmd_search(&cmd, &config),
        Command::Table(cmd) => cli::cmd_table(&cmd, &config),
    }
}
