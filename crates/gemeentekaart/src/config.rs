//! Configuration loaded from YAML.
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the standard setup: the eleven provinces of the cadastral dataset and
//! labels wrapped at 14 characters from zoom 13 upward.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tag holding the province of a cadastral municipality.
pub const DEFAULT_PROVINCE_TAG: &str = "kad:provincie";

/// Provinces present in the cadastral municipality dataset.
pub const DEFAULT_PROVINCES: [&str; 11] = [
    "Drenthe",
    "Friesland",
    "Gelderland",
    "Groningen",
    "Limburg",
    "Noord-Brabant",
    "Noord-Holland",
    "Overijssel",
    "Utrecht",
    "Zeeland",
    "Zuid-Holland",
];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag key used for the province filter and grouping
    pub province_tag: String,

    /// Relations whose province is not listed are skipped.
    /// An empty list accepts everything.
    pub provinces: Vec<String>,

    /// Label layout
    pub labels: LabelConfig,
}

/// Label layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Maximum characters per line before wrapping
    pub wrap_width: usize,

    /// Labels are hidden below this zoom level
    pub min_zoom: f64,

    /// Fixed font size (pt) used when adaptive sizing is off
    pub font_size: f64,

    /// Line spacing as a multiple of the font size
    pub line_height: f64,

    /// Scale text to fit the municipality; `None` keeps `font_size`
    pub adaptive: Option<AdaptiveSizing>,
}

/// Settings for fitting the label to its ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveSizing {
    /// Lower bound on glyph size, in degrees
    #[serde(default = "default_minimum_size")]
    pub minimum_size: f64,
}

fn default_minimum_size() -> f64 {
    0.0005
}

impl Default for Config {
    fn default() -> Self {
        Self {
            province_tag: DEFAULT_PROVINCE_TAG.to_string(),
            provinces: DEFAULT_PROVINCES.iter().map(|p| p.to_string()).collect(),
            labels: LabelConfig::default(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            wrap_width: 14,
            min_zoom: 13.0,
            font_size: 10.0,
            line_height: 1.1,
            adaptive: None,
        }
    }
}

impl Default for AdaptiveSizing {
    fn default() -> Self {
        Self { minimum_size: default_minimum_size() }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Whether a relation in `province` passes the filter.
    pub fn allows_province(&self, province: Option<&str>) -> bool {
        if self.provinces.is_empty() {
            return true;
        }
        province.is_some_and(|p| self.provinces.iter().any(|allowed| allowed == p))
    }
}

// ============================================================================
// TESTS
// ============================================================================
