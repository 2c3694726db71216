//! Takeoff calculator.
//!
//! Counts come from the bounding box of the outline only; the sketch area is
//! reported but never used for counting. Divisors are clamped to
//! [`MIN_DIVISOR_IN`] and integer arithmetic saturates, so every input
//! produces a defined count.

use std::fmt;

use deckkit_core::constants::{INCHES_PER_FOOT, MIN_DIVISOR_IN};
use deckkit_core::units::{format_feet, format_inches_fraction, round_to};
use deckkit_designer::{deck_bounds, polygon_area_and_perimeter, BoundingBox, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::orientation::{BoardDirection, DeckSpans};
use crate::parameters::TakeoffParameters;

/// Quantities derived from an outline and the takeoff parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffResult {
    /// Board rows needed to cover the across extent
    pub board_rows_across: i64,
    pub joist_count: i64,
    /// One clip per board row and joist crossing
    pub clips_no_waste: i64,
    pub clips_with_waste: i64,
    /// Sketch area (sq ft), or B x H when the outline is open
    pub area_sq_ft: f64,
    /// Length each board row runs (ft)
    pub board_run_length_ft: f64,
    /// Bounding B (ft), after fallback
    pub bounding_b_ft: f64,
    /// Bounding H (ft), after fallback
    pub bounding_h_ft: f64,
    pub direction: BoardDirection,
    /// Board width plus gap (in)
    pub module_in: f64,
}

/// `floor((across_ft * 12 + gap) / module)`, with the module clamped to at least 0.01 in.
pub fn board_rows_across(across_ft: f64, board_width_in: f64, board_gap_in: f64) -> i64 {
    let module = (board_width_in + board_gap_in).max(MIN_DIVISOR_IN);
    ((across_ft * INCHES_PER_FOOT + board_gap_in) / module).floor() as i64
}

/// `floor(span_ft * 12 / spacing) + 1`, with the spacing clamped to at least 0.01 in.
pub fn joist_count(span_ft: f64, joist_spacing_oc_in: f64) -> i64 {
    let spacing = joist_spacing_oc_in.max(MIN_DIVISOR_IN);
    ((span_ft * INCHES_PER_FOOT / spacing).floor() as i64).saturating_add(1)
}

/// Clip count scaled by the waste factor, rounded up.
pub fn clips_with_waste(clips_no_waste: i64, waste_factor: f64) -> i64 {
    (clips_no_waste as f64 * waste_factor).ceil() as i64
}

/// Runs the takeoff for explicit deck bounds (ft) and area (sq ft).
pub fn calculate_for_bounds(
    bounds: BoundingBox,
    area_sq_ft: f64,
    params: &TakeoffParameters,
) -> TakeoffResult {
    let spans = DeckSpans::from_bounds(bounds, params.joists_rotated);

    let board_rows = board_rows_across(spans.across_ft, params.board_width_in, params.board_gap_in);
    let joists = joist_count(spans.joist_span_ft, params.joist_spacing_oc_in);
    let clips = board_rows.saturating_mul(joists);
    let with_waste = clips_with_waste(clips, params.waste_factor);

    debug!(
        "Takeoff {:?}: {} rows x {} joists = {} clips ({} with waste)",
        spans.direction, board_rows, joists, clips, with_waste
    );

    TakeoffResult {
        board_rows_across: board_rows,
        joist_count: joists,
        clips_no_waste: clips,
        clips_with_waste: with_waste,
        area_sq_ft,
        board_run_length_ft: spans.board_run_ft,
        bounding_b_ft: bounds.width,
        bounding_h_ft: bounds.height,
        direction: spans.direction,
        module_in: params.module_in(),
    }
}

/// Runs the takeoff for an outline.
///
/// Outlines with fewer than three vertices count over the default 20' x 13'
/// footprint and report its area.
pub fn calculate(points: &[Point], params: &TakeoffParameters) -> TakeoffResult {
    let metrics = polygon_area_and_perimeter(points);
    let bounds = deck_bounds(&metrics);
    let area = if points.len() >= 3 {
        metrics.area
    } else {
        bounds.width * bounds.height
    };
    calculate_for_bounds(bounds, area, params)
}

impl fmt::Display for TakeoffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            BoardDirection::AlongWidth => "along B",
            BoardDirection::AlongHeight => "along H",
        };
        writeln!(f, "Board rows (across):   {}", self.board_rows_across)?;
        writeln!(f, "Joists (count):        {}", self.joist_count)?;
        writeln!(f, "Clips (no waste):      {}", self.clips_no_waste)?;
        writeln!(f, "Clips (with waste):    {}", self.clips_with_waste)?;
        writeln!(
            f,
            "Deck board span:       {} ({})",
            format_feet(self.board_run_length_ft),
            direction
        )?;
        writeln!(f, "Board module:          {}", format_inches_fraction(self.module_in))?;
        write!(f, "Area:                  {} sq ft", round_to(self.area_sq_ft, 1))
    }
}
