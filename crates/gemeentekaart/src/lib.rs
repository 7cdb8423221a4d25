//! # gemeentekaart
//!
//! Boundary assembly and label placement for Dutch cadastral municipalities.
//!
//! The pipeline for one load:
//! 1. [`overpass`] parses the Overpass response and picks relations
//! 2. [`assemble`] joins each relation's ways into closed rings
//! 3. [`polygon`] turns the rings into Polygon / MultiPolygon geometry
//! 4. [`snapshot`] indexes the features by name, id and province
//! 5. [`label`] derives anchor points and wrapped text for display
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod assemble;
pub mod config;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod label;
pub mod overpass;
pub mod polygon;
pub mod snapshot;

// Re-export common types at crate root for convenience.
pub use assemble::{assemble, assemble_with_stats, AssemblyStats};
pub use config::{AdaptiveSizing, Config, LabelConfig};
pub use error::{Error, Result};
pub use feature::{FeatureCollection, LabeledFeature};
pub use geometry::{centroid, is_closed, perimeter, Bounds, Point, Ring, Segment};
pub use label::{break_lines, label_layer, meters_per_pixel, FeatureLabel, LabelPlacement, LabelPlacer};
pub use overpass::{parse_response, to_features, Role};
pub use polygon::{build, PolygonGeometry};
pub use snapshot::{load_snapshot, FeatureSnapshot, ProvinceGroup};
