//! Label placement - anchor point, line wrapping and text size.
//!
//! Nothing here draws anything. A placement says where a label goes, how
//! its text breaks into lines and (optionally) how large it should be.

use std::f64::consts::PI;

use serde::Serialize;

use crate::config::{AdaptiveSizing, LabelConfig};
use crate::geometry::{centroid, perimeter, Bounds, Point, Ring};
use crate::polygon::PolygonGeometry;
use crate::snapshot::FeatureSnapshot;

/// Equatorial circumference in meters, as used by web map tiles.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

/// Where and how to show one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    /// Centroid of the dominant ring
    pub anchor: Point,
    /// Wrapped text lines, top to bottom
    pub lines: Vec<String>,
    /// Text size in display pixels, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// A placement tied to the feature it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureLabel {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub placement: LabelPlacement,
    /// Vertical offset of each line below the anchor, in pixels
    pub line_offsets: Vec<f64>,
}

/// Computes label placements for a fixed wrap width and sizing mode.
#[derive(Debug, Clone, Copy)]
pub struct LabelPlacer {
    pub wrap_width: usize,
    /// Zoom level and sizing rule for adaptive text, if enabled
    pub sizing: Option<(f64, AdaptiveSizing)>,
}

impl LabelPlacer {
    /// Plain placer: anchor and lines only.
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width, sizing: None }
    }

    /// Scale text to the dominant ring at the given zoom level.
    pub fn with_sizing(mut self, zoom: f64, sizing: AdaptiveSizing) -> Self {
        self.sizing = Some((zoom, sizing));
        self
    }

    /// Place a label for `name` on `geometry`.
    ///
    /// Returns `None` only when the geometry has no non-empty exterior ring.
    pub fn place(&self, geometry: &PolygonGeometry, name: &str) -> Option<LabelPlacement> {
        let ring = dominant_ring(geometry)?;
        let anchor = centroid(ring)?;
        let lines = break_lines(name, self.wrap_width);

        let font_size = self.sizing.and_then(|(zoom, sizing)| {
            let bounds = Bounds::of_points(ring)?;
            Some(fit_font_size(&bounds, lines.len(), anchor.y, zoom, &sizing))
        });

        Some(LabelPlacement { anchor, lines, font_size })
    }
}

impl LabelPlacement {
    /// Vertical offset of each line relative to the anchor.
    pub fn line_offsets(&self, base_size: f64, line_height: f64) -> Vec<f64> {
        let size = self.font_size.unwrap_or(base_size);
        (0..self.lines.len())
            .map(|i| i as f64 * size * line_height)
            .collect()
    }
}

/// The exterior ring with the longest perimeter.
///
/// Perimeter stands in for visual size; it is cheaper than area and picks
/// the main part of a municipality split across islands. Ties keep the
/// earlier ring.
pub fn dominant_ring(geometry: &PolygonGeometry) -> Option<&Ring> {
    let mut best: Option<&Ring> = None;
    let mut best_len = 0.0;

    for ring in geometry.exterior_rings() {
        if ring.is_empty() {
            continue;
        }
        let len = perimeter(ring);
        if best.is_none() || len > best_len {
            best = Some(ring);
            best_len = len;
        }
    }

    best
}

/// Greedy word wrap.
///
/// Words are split on single spaces and added to the current line while
/// the trimmed result stays within `max_len` characters. A word that does
/// not fit starts a new line; a word longer than `max_len` gets a line of
/// its own, unmodified.
pub fn break_lines(name: &str, max_len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in name.split(' ') {
        let candidate = format!("{} {}", line, word);
        if candidate.trim().chars().count() > max_len && !line.is_empty() {
            lines.push(line.trim().to_string());
            line = word.to_string();
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        lines.push(line.trim().to_string());
    }
    lines
}

/// Ground distance covered by one pixel at `lat` and `zoom`.
///
/// Flat Mercator scale: only valid for small extents around `lat`.
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    EARTH_CIRCUMFERENCE * (lat * PI / 180.0).cos() / 2f64.powf(zoom + 8.0)
}

/// Pixel size for text that fits inside `bounds`.
///
/// The glyph size is picked in degrees (`0.8 * min_side / line_count`, at
/// least `minimum_size`), converted to meters along a meridian, then to
/// pixels at the given zoom.
pub fn fit_font_size(
    bounds: &Bounds,
    line_count: usize,
    lat: f64,
    zoom: f64,
    sizing: &AdaptiveSizing,
) -> f64 {
    let lines = line_count.max(1) as f64;
    let size_deg = sizing.minimum_size.max(0.8 * bounds.min_side() / lines);
    let size_m = size_deg * EARTH_CIRCUMFERENCE / 360.0;
    size_m / meters_per_pixel(lat, zoom)
}

/// Labels for every named feature in the snapshot.
///
/// Empty below `config.min_zoom`. Without adaptive sizing each label
/// carries the configured fixed font size.
pub fn label_layer(snapshot: &FeatureSnapshot, zoom: f64, config: &LabelConfig) -> Vec<FeatureLabel> {
    if zoom < config.min_zoom {
        return Vec::new();
    }

    let mut placer = LabelPlacer::new(config.wrap_width);
    if let Some(sizing) = config.adaptive {
        placer = placer.with_sizing(zoom, sizing);
    }

    let labels: Vec<FeatureLabel> = snapshot
        .features()
        .iter()
        .filter_map(|feature| {
            let name = feature.name()?;
            let mut placement = placer.place(&feature.geometry, name)?;
            placement.font_size.get_or_insert(config.font_size);
            let line_offsets = placement.line_offsets(config.font_size, config.line_height);
            Some(FeatureLabel {
                id: feature.id,
                name: name.to_string(),
                placement,
                line_offsets,
            })
        })
        .collect();

    tracing::debug!(zoom, labels = labels.len(), "label layer computed");
    labels
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::LabeledFeature;
    use crate::polygon::build;
    use std::collections::BTreeMap;

    fn square(x: f64, y: f64, side: f64) -> Ring {
        vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
            Point::new(x, y),
        ]
    }

    fn feature(id: i64, name: Option<&str>, ring: Ring) -> LabeledFeature {
        let mut tags = BTreeMap::new();
        if let Some(name) = name {
            tags.insert("name".to_string(), name.to_string());
        }
        LabeledFeature {
            id,
            tags,
            geometry: build(vec![ring], vec![]).unwrap(),
        }
    }

    #[test]
    fn short_name_single_line() {
        assert_eq!(break_lines("Tilburg", 14), vec!["Tilburg"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = break_lines("Sint Michielsgestel en Den Dungen", 14);
        assert_eq!(lines, vec!["Sint", "Michielsgestel", "en Den Dungen"]);
        for line in &lines {
            assert!(line.chars().count() <= 14, "line too long: {:?}", line);
        }
    }

    #[test]
    fn long_word_kept_whole() {
        assert_eq!(break_lines("Noord-Brabant-Gemeente", 14), vec!["Noord-Brabant-Gemeente"]);
        assert_eq!(
            break_lines("Oud Noord-Brabant-Gemeente", 14),
            vec!["Oud", "Noord-Brabant-Gemeente"]
        );
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        // 11 characters, 12 bytes
        assert_eq!(break_lines("Hé Wijk bij", 11), vec!["Hé Wijk bij"]);
    }

    #[test]
    fn dominant_ring_by_perimeter() {
        let geometry = build(
            vec![square(0.0, 0.0, 1.0), square(10.0, 10.0, 3.0), square(20.0, 20.0, 2.0)],
            vec![],
        )
        .unwrap();

        assert_eq!(dominant_ring(&geometry), Some(&square(10.0, 10.0, 3.0)));
    }

    #[test]
    fn dominant_ring_tie_keeps_first() {
        let geometry = build(vec![square(0.0, 0.0, 2.0), square(5.0, 5.0, 2.0)], vec![]).unwrap();
        assert_eq!(dominant_ring(&geometry), Some(&square(0.0, 0.0, 2.0)));
    }

    #[test]
    fn place_on_square() {
        let geometry = build(vec![square(0.0, 0.0, 4.0)], vec![]).unwrap();
        let placement = LabelPlacer::new(14).place(&geometry, "Tilburg").unwrap();

        assert_eq!(placement.anchor, Point::new(2.0, 2.0));
        assert_eq!(placement.lines, vec!["Tilburg"]);
        assert_eq!(placement.font_size, None);
    }

    #[test]
    fn meters_per_pixel_at_equator() {
        let mpp = meters_per_pixel(0.0, 0.0);
        assert!((mpp - EARTH_CIRCUMFERENCE / 256.0).abs() < 1e-6);

        // Halves with every zoom level
        let ratio = meters_per_pixel(52.0, 13.0) / meters_per_pixel(52.0, 14.0);
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn adaptive_size_respects_minimum() {
        let sizing = AdaptiveSizing { minimum_size: 0.01 };
        let tiny = Bounds { min_x: 5.0, min_y: 52.0, max_x: 5.001, max_y: 52.001 };
        let large = Bounds { min_x: 5.0, min_y: 52.0, max_x: 5.1, max_y: 52.1 };

        let at_minimum = fit_font_size(&tiny, 1, 52.0, 13.0, &sizing);
        let expected = 0.01 * EARTH_CIRCUMFERENCE / 360.0 / meters_per_pixel(52.0, 13.0);
        assert!((at_minimum - expected).abs() < 1e-9);

        let fitted = fit_font_size(&large, 2, 52.0, 13.0, &sizing);
        let expected = 0.04 * EARTH_CIRCUMFERENCE / 360.0 / meters_per_pixel(52.0, 13.0);
        assert!((fitted - expected).abs() < 1e-6);
    }

    #[test]
    fn adaptive_placement_sets_font_size() {
        let geometry = build(vec![square(5.0, 52.0, 0.02)], vec![]).unwrap();
        let placer = LabelPlacer::new(14).with_sizing(14.0, AdaptiveSizing::default());

        let small = placer.place(&geometry, "Wijk").unwrap();
        let wrapped = placer.place(&geometry, "Wijk bij Duurstede en Omgeving").unwrap();

        let small_size = small.font_size.unwrap();
        assert!(small_size > 0.0);
        assert!(wrapped.font_size.unwrap() < small_size, "more lines should shrink text");
    }

    #[test]
    fn line_offsets_follow_font_size() {
        let placement = LabelPlacement {
            anchor: Point::new(0.0, 0.0),
            lines: vec!["a".into(), "b".into(), "c".into()],
            font_size: None,
        };
        let offsets = placement.line_offsets(10.0, 1.1);
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets[0], 0.0);
        assert!((offsets[2] - 22.0).abs() < 1e-9);
    }

    #[test]
    fn layer_hidden_below_min_zoom() {
        let snapshot = FeatureSnapshot::new(vec![feature(1, Some("Tilburg"), square(0.0, 0.0, 4.0))], "kad:provincie");
        let config = LabelConfig::default();

        assert!(label_layer(&snapshot, 12.0, &config).is_empty());
        assert_eq!(label_layer(&snapshot, 13.0, &config).len(), 1);
    }

    #[test]
    fn layer_skips_unnamed_features() {
        let snapshot = FeatureSnapshot::new(
            vec![
                feature(1, Some("Tilburg"), square(0.0, 0.0, 4.0)),
                feature(2, None, square(10.0, 0.0, 4.0)),
            ],
            "kad:provincie",
        );
        let labels = label_layer(&snapshot, 14.0, &LabelConfig::default());

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].id, 1);
        assert_eq!(labels[0].placement.anchor, Point::new(2.0, 2.0));
        assert_eq!(labels[0].placement.font_size, Some(10.0));
        assert_eq!(labels[0].line_offsets, vec![0.0]);
    }

    #[test]
    fn layer_skips_empty_names() {
        let snapshot = FeatureSnapshot::new(vec![feature(9, Some(""), square(0.0, 0.0, 4.0))], "kad:provincie");
        assert!(label_layer(&snapshot, 14.0, &LabelConfig::default()).is_empty());
    }

    #[test]
    fn layer_offsets_use_line_height() {
        let snapshot = FeatureSnapshot::new(
            vec![feature(1, Some("Sint Michielsgestel"), square(0.0, 0.0, 4.0))],
            "kad:provincie",
        );
        let config = LabelConfig { line_height: 1.5, ..LabelConfig::default() };
        let labels = label_layer(&snapshot, 14.0, &config);

        assert_eq!(labels[0].placement.lines.len(), 2);
        assert_eq!(labels[0].line_offsets, vec![0.0, 15.0]);
    }
}
