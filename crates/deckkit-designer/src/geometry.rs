//! Geometry kernel for deck outlines.
//!
//! Pure functions over vertex sequences in feet: shoelace area, closed
//! perimeter, bounding box, grid snapping and segment resizing. Nothing here
//! holds state; the editor and the takeoff calculator call into it.

use deckkit_core::constants::DEGENERATE_SEGMENT_LENGTH;
use deckkit_core::units::{inches_to_feet, round_half_up};
use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Width and height of the axis-aligned box around an outline (feet).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the box with width and height exchanged.
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Area, perimeter and bounds of a closed outline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonMetrics {
    /// Enclosed area in square feet
    pub area: f64,
    /// Closed perimeter in feet
    pub perimeter: f64,
    pub bounding_box: BoundingBox,
}

/// Computes area, perimeter and bounding box of the closed outline `points`.
///
/// Outlines with fewer than three vertices have no interior and report all
/// zeros, including the perimeter of the open path. The area is the absolute
/// shoelace sum, so winding direction and starting vertex do not matter.
pub fn polygon_area_and_perimeter(points: &[Point]) -> PolygonMetrics {
    if points.len() < 3 {
        return PolygonMetrics::default();
    }

    let mut twice_area = 0.0;
    let mut perimeter = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = &points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
        perimeter += a.distance_to(b);
    }

    let (min_x, max_x) = min_max(points.iter().map(|p| p.x));
    let (min_y, max_y) = min_max(points.iter().map(|p| p.y));

    PolygonMetrics {
        area: twice_area.abs() / 2.0,
        perimeter,
        bounding_box: BoundingBox::new(max_x - min_x, max_y - min_y),
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Snaps `point` to the nearest intersection of a grid with `step_inches` spacing.
///
/// Each coordinate is rounded independently, `.5` rounding up. A step that is
/// not a positive finite number leaves the point untouched.
pub fn snap_to_grid(point: Point, step_inches: f64) -> Point {
    if !(step_inches.is_finite() && step_inches > 0.0) {
        return point;
    }
    let step = inches_to_feet(step_inches);
    Point::new(
        round_half_up(point.x / step) * step,
        round_half_up(point.y / step) * step,
    )
}

/// Moves `b` along the ray from `a` through `b` so that the segment is `new_length` long.
///
/// When `a` and `b` coincide the direction collapses to zero and `a` is returned.
pub fn adjust_segment_endpoint(a: Point, b: Point, new_length: f64) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut length = dx.hypot(dy);
    if length == 0.0 {
        length = DEGENERATE_SEGMENT_LENGTH;
    }
    Point::new(
        a.x + dx / length * new_length,
        a.y + dy / length * new_length,
    )
}

/// Number of edges drawn for an outline with `vertex_count` vertices.
///
/// Two vertices form a single open segment; the closing edge only exists
/// from three vertices on.
pub fn edge_count(vertex_count: usize) -> usize {
    match vertex_count {
        0 | 1 => 0,
        2 => 1,
        n => n,
    }
}

/// One drawable edge of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}

/// Returns edge `index` (vertex `index` to vertex `index + 1`, wrapping), if drawn.
pub fn edge(points: &[Point], index: usize) -> Option<Edge> {
    if index >= edge_count(points.len()) {
        return None;
    }
    Some(Edge {
        index,
        start: points[index],
        end: points[(index + 1) % points.len()],
    })
}

/// Iterates over the drawable edges of an outline in vertex order.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    (0..edge_count(points.len())).filter_map(move |i| edge(points, i))
}
