//! Board and joist directions relative to the deck bounds.
//!
//! Boards always run perpendicular to the joists. With the joists in their
//! normal position the boards run along B (the bounding width) and the rows
//! stack across H; turning the joists 90 degrees swaps both roles. Joists
//! are counted along the same extent the board rows cross.

use deckkit_designer::BoundingBox;
use serde::{Deserialize, Serialize};

/// Dimension of the bounding box the boards run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardDirection {
    /// Boards run along B
    AlongWidth,
    /// Boards run along H
    AlongHeight,
}

impl BoardDirection {
    pub fn from_joists_rotated(joists_rotated: bool) -> Self {
        if joists_rotated {
            Self::AlongHeight
        } else {
            Self::AlongWidth
        }
    }
}

/// Extents used for counting, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckSpans {
    pub direction: BoardDirection,
    /// Length each board row runs
    pub board_run_ft: f64,
    /// Extent the board rows stack across
    pub across_ft: f64,
    /// Extent the joists are spaced along
    pub joist_span_ft: f64,
}

impl DeckSpans {
    pub fn from_bounds(bounds: BoundingBox, joists_rotated: bool) -> Self {
        let direction = BoardDirection::from_joists_rotated(joists_rotated);
        // Boards always run along the width of the oriented box
        let oriented = match direction {
            BoardDirection::AlongWidth => bounds,
            BoardDirection::AlongHeight => bounds.transposed(),
        };
        Self {
            direction,
            board_run_ft: oriented.width,
            across_ft: oriented.height,
            joist_span_ft: oriented.height,
        }
    }
}
