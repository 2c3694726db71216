//! Numeric readouts shown under the sketch.

use std::fmt;

use deckkit_core::constants::{DEFAULT_DECK_HEIGHT_FT, DEFAULT_DECK_WIDTH_FT};
use deckkit_core::units::{format_feet, round_to};
use serde::{Deserialize, Serialize};

use crate::geometry::{polygon_area_and_perimeter, BoundingBox, PolygonMetrics};
use crate::model::Point;

/// Deck dimensions used for counting: B (width) and H (height).
///
/// A dimension of zero, which includes every outline with fewer than three
/// vertices, falls back to the default 20' x 13' footprint.
pub fn deck_bounds(metrics: &PolygonMetrics) -> BoundingBox {
    let bb = metrics.bounding_box;
    BoundingBox::new(
        if bb.width != 0.0 {
            bb.width
        } else {
            DEFAULT_DECK_WIDTH_FT
        },
        if bb.height != 0.0 {
            bb.height
        } else {
            DEFAULT_DECK_HEIGHT_FT
        },
    )
}

/// Summary of the current outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchReadout {
    /// Sketch area in square feet (0 for an open outline)
    pub area: f64,
    /// Closed perimeter in feet (0 for an open outline)
    pub perimeter: f64,
    /// Bounding B in feet, after fallback
    pub bounding_b: f64,
    /// Bounding H in feet, after fallback
    pub bounding_h: f64,
    pub vertex_count: usize,
}

impl SketchReadout {
    pub fn from_points(points: &[Point]) -> Self {
        let metrics = polygon_area_and_perimeter(points);
        let bounds = deck_bounds(&metrics);
        Self {
            area: metrics.area,
            perimeter: metrics.perimeter,
            bounding_b: bounds.width,
            bounding_h: bounds.height,
            vertex_count: points.len(),
        }
    }
}

impl fmt::Display for SketchReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sketch area: {} sq ft", round_to(self.area, 1))?;
        writeln!(f, "Perimeter:   {} ft", round_to(self.perimeter, 1))?;
        writeln!(f, "Bounding B:  {}", format_feet(self.bounding_b))?;
        writeln!(f, "Bounding H:  {}", format_feet(self.bounding_h))?;
        write!(f, "Vertices:    {}", self.vertex_count)
    }
}
