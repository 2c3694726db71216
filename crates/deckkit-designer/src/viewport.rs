//! Coordinate mapping between the sketch canvas (pixels) and the deck (feet).
//!
//! The presentation layer hands raw pointer positions in canvas pixels; the
//! editor works in feet only. A [`PixelMapping`] is an origin offset plus a
//! uniform scale, refitted to the outline every time it is drawn.

use std::fmt;

use deckkit_core::constants::{
    DEFAULT_DECK_HEIGHT_FT, DEFAULT_DECK_WIDTH_FT, SKETCH_CANVAS_HEIGHT_PX,
    SKETCH_CANVAS_WIDTH_PX, SKETCH_PADDING_PX,
};
use serde::{Deserialize, Serialize};

use crate::grid::GridResolution;
use crate::model::Point;

/// Pixel dimensions of the sketch canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    /// Margin kept free on every side of the drawable area
    pub padding: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Drawable width inside the padding.
    pub fn inner_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    /// Drawable height inside the padding.
    pub fn inner_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(
            SKETCH_CANVAS_WIDTH_PX,
            SKETCH_CANVAS_HEIGHT_PX,
            SKETCH_PADDING_PX,
        )
    }
}

/// Region of the deck plane (feet) that the canvas shows.
///
/// Always contains the origin and at least the default deck footprint, so a
/// small or empty outline still gets a usable drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SketchExtent {
    pub fn from_points(points: &[Point]) -> Self {
        let mut extent = Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: DEFAULT_DECK_WIDTH_FT,
            max_y: DEFAULT_DECK_HEIGHT_FT,
        };
        for p in points {
            extent.min_x = extent.min_x.min(p.x);
            extent.min_y = extent.min_y.min(p.y);
            extent.max_x = extent.max_x.max(p.x);
            extent.max_y = extent.max_y.max(p.y);
        }
        extent
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Affine pixel <-> feet mapping: `pixel = padding + (feet - origin) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapping {
    origin: Point,
    padding: f64,
    scale: f64,
}

impl PixelMapping {
    /// Creates a mapping from an explicit origin (feet), padding (pixels) and scale (pixels per foot).
    ///
    /// A scale that is not a positive finite number is replaced by 1.0.
    pub fn new(origin: Point, padding: f64, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            origin,
            padding,
            scale,
        }
    }

    /// Fits the sketch extent of `points` into `canvas`, keeping the aspect ratio.
    pub fn fit(points: &[Point], canvas: &CanvasSize) -> Self {
        let extent = SketchExtent::from_points(points);
        let scale_x = canvas.inner_width() / extent.width().max(1.0);
        let scale_y = canvas.inner_height() / extent.height().max(1.0);
        Self::new(
            Point::new(extent.min_x, extent.min_y),
            canvas.padding,
            scale_x.min(scale_y),
        )
    }

    /// Pixels per foot.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Deck coordinate drawn at the padding corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Converts canvas pixel coordinates to a deck point in feet.
    pub fn to_feet(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.padding) / self.scale + self.origin.x,
            (pixel_y - self.padding) / self.scale + self.origin.y,
        )
    }

    /// Converts a deck point in feet to canvas pixel coordinates.
    pub fn to_pixels(&self, point: &Point) -> (f64, f64) {
        (
            self.padding + (point.x - self.origin.x) * self.scale,
            self.padding + (point.y - self.origin.y) * self.scale,
        )
    }

    /// On-screen spacing of the grid lines for `grid`.
    pub fn grid_step_pixels(&self, grid: GridResolution) -> f64 {
        grid.feet() * self.scale
    }
}

impl fmt::Display for PixelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2} px/ft | Origin: ({:.2}, {:.2}) ft",
            self.scale, self.origin.x, self.origin.y
        )
    }
}

impl Default for PixelMapping {
    fn default() -> Self {
        Self::fit(&[], &CanvasSize::default())
    }
}
