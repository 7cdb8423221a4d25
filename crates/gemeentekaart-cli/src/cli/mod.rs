//! CLI command implementations.
//!
//! - `convert` - Overpass JSON to GeoJSON
//! - `labels` - label placements for a zoom level
//! - `search` - look up one municipality
//! - `table` - municipalities grouped by province

pub mod common;
pub mod convert;
pub mod labels;
pub mod search;
pub mod table;

pub use convert::{cmd_convert, ConvertArgs};
pub use labels::{cmd_labels, LabelsArgs};
pub use search::{cmd_search, SearchArgs};
pub use table::{cmd_table, TableArgs};
