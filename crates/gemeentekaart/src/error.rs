//! Error type for the gemeentekaart library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading data or configuration.
///
/// Topology problems are never errors: open rings are force-closed and
/// relations without outer ways are skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid Overpass response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no polygons found in layer")]
    NoFeatures,
}

pub type Result<T> = std::result::Result<T, Error>;
