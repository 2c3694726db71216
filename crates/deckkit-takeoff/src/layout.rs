//! Parametric preview of board rows and joists over the deck bounds.
//!
//! Offsets are in feet from the bounds origin. Stripes and joist lines
//! match the counts of the takeoff for the same inputs, except that at
//! least one board stripe is always drawn and each list is capped at
//! [`MAX_PREVIEW_LINES`].

use deckkit_core::units::inches_to_feet;
use deckkit_designer::BoundingBox;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::{board_rows_across, joist_count};
use crate::orientation::{BoardDirection, DeckSpans};
use crate::parameters::TakeoffParameters;

/// Upper bound on stripes or joist lines in one preview.
pub const MAX_PREVIEW_LINES: usize = 10_000;

/// Axis along which a stripe or line is offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutAxis {
    X,
    Y,
}

/// One board row: a band `thickness_ft` wide spanning the full run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardStripe {
    pub index: usize,
    pub offset_ft: f64,
    pub thickness_ft: f64,
    pub axis: LayoutAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoistLine {
    pub index: usize,
    pub offset_ft: f64,
    pub axis: LayoutAxis,
}

/// Everything a renderer needs to draw the board and joist pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPreview {
    pub bounds: BoundingBox,
    pub boards: Vec<BoardStripe>,
    pub joists: Vec<JoistLine>,
}

/// Builds the preview for `bounds` (ft).
pub fn layout_preview(bounds: BoundingBox, params: &TakeoffParameters) -> LayoutPreview {
    let spans = DeckSpans::from_bounds(bounds, params.joists_rotated);
    let axis = match spans.direction {
        BoardDirection::AlongWidth => LayoutAxis::Y,
        BoardDirection::AlongHeight => LayoutAxis::X,
    };

    let rows = board_rows_across(spans.across_ft, params.board_width_in, params.board_gap_in);
    let module_ft = params.module_ft();
    let thickness_ft = inches_to_feet(params.board_width_in);
    let boards = (0..stripe_count(rows.max(1)))
        .map(|index| BoardStripe {
            index,
            offset_ft: index as f64 * module_ft,
            thickness_ft,
            axis,
        })
        .collect();

    let spacing_ft = inches_to_feet(params.joist_spacing_oc_in);
    let joists = (0..stripe_count(joist_count(spans.joist_span_ft, params.joist_spacing_oc_in)))
        .map(|index| JoistLine {
            index,
            offset_ft: index as f64 * spacing_ft,
            axis,
        })
        .collect();

    LayoutPreview {
        bounds,
        boards,
        joists,
    }
}

fn stripe_count(count: i64) -> usize {
    let count = usize::try_from(count).unwrap_or(0);
    if count > MAX_PREVIEW_LINES {
        debug!("Preview truncated from {} to {} lines", count, MAX_PREVIEW_LINES);
    }
    count.min(MAX_PREVIEW_LINES)
}
