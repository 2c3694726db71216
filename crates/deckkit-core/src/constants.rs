//! Shared defaults for the sketch canvas and the deck outline.

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Width of the default deck outline (feet).
pub const DEFAULT_DECK_WIDTH_FT: f64 = 20.0;

/// Height of the default deck outline (feet).
pub const DEFAULT_DECK_HEIGHT_FT: f64 = 13.0;

/// Sketch canvas width in pixels.
pub const SKETCH_CANVAS_WIDTH_PX: f64 = 860.0;

/// Sketch canvas height in pixels.
pub const SKETCH_CANVAS_HEIGHT_PX: f64 = 400.0;

/// Padding between the canvas border and the drawable area (pixels).
pub const SKETCH_PADDING_PX: f64 = 24.0;

/// Lower bound applied to divisors in the takeoff math (inches).
pub const MIN_DIVISOR_IN: f64 = 0.01;

/// Direction length used when a segment has no length.
pub const DEGENERATE_SEGMENT_LENGTH: f64 = 1e-9;

/// Default board width (inches).
pub const DEFAULT_BOARD_WIDTH_IN: f64 = 5.5;

/// Default gap between boards (inches).
pub const DEFAULT_BOARD_GAP_IN: f64 = 0.25;

/// Default joist spacing, on center (inches).
pub const DEFAULT_JOIST_SPACING_OC_IN: f64 = 16.0;

/// Default waste multiplier for clip counts.
pub const DEFAULT_WASTE_FACTOR: f64 = 1.05;
