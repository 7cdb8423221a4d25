//! Labeled features and their GeoJSON form.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geometry::Bounds;
use crate::polygon::PolygonGeometry;

/// One municipality: id, source tags and assembled geometry.
///
/// Built once per load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledFeature {
    /// Relation id from the source, unique within a dataset
    pub id: i64,
    pub tags: BTreeMap<String, String>,
    pub geometry: PolygonGeometry,
}

impl LabeledFeature {
    /// Display name (`name` tag).
    pub fn name(&self) -> Option<&str> {
        self.tag("name")
    }

    /// Value of the given tag. An empty value counts as missing.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Bounding box over all rings.
    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounds()
    }
}

/// A GeoJSON `Feature` borrowing from a [`LabeledFeature`].
#[derive(Debug, Serialize)]
pub struct GeoJsonFeature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: i64,
    geometry: &'a PolygonGeometry,
    properties: &'a BTreeMap<String, String>,
}

/// A GeoJSON `FeatureCollection`, ready for `serde_json`.
#[derive(Debug, Serialize)]
pub struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<GeoJsonFeature<'a>>,
}

impl<'a> FeatureCollection<'a> {
    pub fn new(features: &'a [LabeledFeature]) -> Self {
        Self {
            kind: "FeatureCollection",
            features: features
                .iter()
                .map(|f| GeoJsonFeature {
                    kind: "Feature",
                    id: f.id,
                    geometry: &f.geometry,
                    properties: &f.tags,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
