//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use gemeentekaart::{load_snapshot, Config, FeatureSnapshot};

/// Load the config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path).context("loading configuration"),
        None => Ok(Config::default()),
    }
}

/// Read an input file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("reading stdin")?;
        return Ok(content);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Read an Overpass response and build a snapshot from it.
pub fn load_input(path: &Path, config: &Config) -> Result<FeatureSnapshot> {
    let json = read_input(path)?;
    let snapshot = load_snapshot(&json, config)
        .with_context(|| format!("processing {}", path.display()))?;
    tracing::info!(features = snapshot.len(), "snapshot loaded");
    Ok(snapshot)
}

/// Write `value` as pretty JSON to a file, or stdout when `output` is `None`.
pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("serializing output")?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(json.as_bytes())
                .context("writing stdout")?;
        }
    }
    Ok(())
}
