//! Overpass import - turn `out geom` relations into labeled features.
//!
//! Each cadastral municipality is a relation whose members are ways tagged
//! `outer` or `inner`. With `out geom` every way member carries its own
//! coordinates, so no node lookup is needed: the ways are joined into
//! rings and the rings into polygon geometry.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::assemble::assemble_with_stats;
use crate::config::Config;
use crate::error::Result;
use crate::feature::LabeledFeature;
use crate::geometry::{Point, Segment};
use crate::polygon::build;

/// Top level of an Overpass JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Any element in the response. Only relations are used.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub members: Option<Vec<Member>>,
}

/// A relation member.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub geometry: Option<Vec<LatLon>>,
}

/// A coordinate as Overpass writes it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<LatLon> for Point {
    fn from(c: LatLon) -> Self {
        Point::new(c.lon, c.lat)
    }
}

/// Member role within a boundary relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Outer,
    Inner,
}

impl Role {
    /// Parse an Overpass role string; other roles are not part of the boundary.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "outer" => Some(Role::Outer),
            "inner" => Some(Role::Inner),
            _ => None,
        }
    }
}

/// Parse an Overpass JSON response.
pub fn parse_response(json: &str) -> Result<OverpassResponse> {
    Ok(serde_json::from_str(json)?)
}

/// Convert all usable relations into features, keeping response order.
pub fn to_features(response: &OverpassResponse, config: &Config) -> Vec<LabeledFeature> {
    let features: Vec<LabeledFeature> = response
        .elements
        .iter()
        .filter_map(|el| relation_to_feature(el, config))
        .collect();

    tracing::info!(
        elements = response.elements.len(),
        features = features.len(),
        "converted Overpass response"
    );
    features
}

/// Convert one relation, or `None` when it is filtered out or has no
/// outer ways.
pub fn relation_to_feature(element: &Element, config: &Config) -> Option<LabeledFeature> {
    if element.kind != "relation" {
        return None;
    }
    let (Some(tags), Some(members)) = (&element.tags, &element.members) else {
        return None;
    };

    let province = tags.get(&config.province_tag).map(String::as_str);
    if !config.allows_province(province) {
        return None;
    }

    let mut outers: Vec<Segment> = Vec::new();
    let mut inners: Vec<Segment> = Vec::new();

    for member in members {
        if member.kind != "way" {
            continue;
        }
        let Some(geometry) = &member.geometry else {
            continue;
        };
        let Some(role) = Role::parse(&member.role) else {
            continue;
        };
        if geometry.is_empty() {
            tracing::warn!(relation = element.id, role = %member.role, "way member without coordinates skipped");
            continue;
        }

        let segment: Segment = geometry.iter().copied().map(Point::from).collect();
        match role {
            Role::Outer => outers.push(segment),
            Role::Inner => inners.push(segment),
        }
    }

    if outers.is_empty() {
        tracing::debug!(relation = element.id, "relation without outer ways skipped");
        return None;
    }

    let (outer_rings, outer_stats) = assemble_with_stats(&outers);
    let (inner_rings, inner_stats) = assemble_with_stats(&inners);
    let forced = outer_stats.forced_closures + inner_stats.forced_closures;
    if forced > 0 {
        tracing::debug!(relation = element.id, forced, "relation has open rings");
    }

    let geometry = build(outer_rings, inner_rings)?;

    Some(LabeledFeature {
        id: element.id,
        tags: tags.clone(),
        geometry,
    })
}

// ============================================================================
// TESTS
// ============================================================================
