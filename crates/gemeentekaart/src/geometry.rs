//! Core geometry types for gemeentekaart.
//!
//! Coordinates are plain longitude/latitude degrees treated as a flat plane.
//! No projection is applied anywhere in this module.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Copy` = a `Point` is two floats, so it is copied instead of moved
//! - `PartialEq` = `==` compares both coordinates exactly (no tolerance!)
//! - `Serialize`/`Deserialize` = serde support, here routed through `[f64; 2]`

use serde::{Deserialize, Serialize};

/// A 2D point: `x` is longitude, `y` is latitude.
///
/// Serializes as a GeoJSON position `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One way from the source data: an open polyline of at least one point.
pub type Segment = Vec<Point>;

/// A closed polyline. First and last point are equal once assembled.
pub type Ring = Vec<Point>;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in native coordinate units.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Bounds {
    /// Bounding box of a point sequence, `None` when empty.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some(Self { min_x, min_y, max_x, max_y })
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The shorter of width and height.
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.width().min(self.height())
    }
}

/// True when the ring has at least two points and its ends coincide exactly.
///
/// A single point is never closed, even though it trivially equals itself.
pub fn is_closed(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => first == last,
        _ => false,
    }
}

/// Sum of the distances between consecutive vertices.
pub fn perimeter(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Area-weighted centroid of a ring.
///
/// Accumulates `f = x_i*y_j - x_j*y_i` over consecutive (wrapping) vertex
/// pairs. When the resulting area is exactly zero the ring's first vertex
/// is returned instead. `None` only for an empty ring.
pub fn centroid(points: &[Point]) -> Option<Point> {
    let first = *points.first()?;
    let n = points.len();

    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let f = a.x * b.y - b.x * a.y;
        area += f;
        cx += (a.x + b.x) * f;
        cy += (a.y + b.y) * f;
    }
    area /= 2.0;

    if area == 0.0 {
        return Some(first);
    }
    Some(Point::new(cx / (6.0 * area), cy / (6.0 * area)))
}

// ============================================================================
// TESTS
// ============================================================================
