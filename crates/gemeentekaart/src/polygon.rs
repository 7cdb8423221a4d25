//! Polygon building - turn assembled rings into GeoJSON-shaped geometry.

use serde::Serialize;

use crate::geometry::{Bounds, Ring};

/// Polygon or multi-polygon geometry.
///
/// Serializes as a GeoJSON geometry object, e.g.
/// `{"type": "Polygon", "coordinates": [[[x, y], ...], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum PolygonGeometry {
    /// `rings[0]` is the exterior, the rest are holes.
    Polygon(Vec<Ring>),
    /// One entry per polygon, each a list of rings.
    MultiPolygon(Vec<Vec<Ring>>),
}

impl PolygonGeometry {
    /// The exterior ring of every polygon part.
    pub fn exterior_rings(&self) -> Vec<&Ring> {
        match self {
            PolygonGeometry::Polygon(rings) => rings.first().into_iter().collect(),
            PolygonGeometry::MultiPolygon(polygons) => {
                polygons.iter().filter_map(|rings| rings.first()).collect()
            }
        }
    }

    /// Every ring, exteriors and holes alike.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            PolygonGeometry::Polygon(rings) => Box::new(rings.iter()),
            PolygonGeometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
        }
    }

    /// Bounding box over all rings.
    pub fn bounds(&self) -> Option<Bounds> {
        self.rings()
            .filter_map(|ring| Bounds::of_points(ring))
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PolygonGeometry::Polygon(_) => "Polygon",
            PolygonGeometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

/// Build geometry from assembled outer and inner rings.
///
/// - no outer rings: `None`, the entity has no geometry
/// - one outer ring: a `Polygon` carrying every inner ring as a hole
/// - several outer rings: a `MultiPolygon` of hole-less parts
///
/// In the multi-polygon case inner rings are dropped. Holes are not matched
/// to the exterior that contains them, and downstream consumers rely on
/// this output, so it stays as is.
pub fn build(outer_rings: Vec<Ring>, inner_rings: Vec<Ring>) -> Option<PolygonGeometry> {
    match outer_rings.len() {
        0 => None,
        1 => {
            let mut rings = outer_rings;
            rings.extend(inner_rings);
            Some(PolygonGeometry::Polygon(rings))
        }
        n => {
            if !inner_rings.is_empty() {
                tracing::debug!(
                    outer = n,
                    dropped = inner_rings.len(),
                    "multipolygon built without holes"
                );
            }
            Some(PolygonGeometry::MultiPolygon(
                outer_rings.into_iter().map(|ring| vec![ring]).collect(),
            ))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
