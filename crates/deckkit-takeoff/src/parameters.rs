//! User-set inputs to the takeoff.

use deckkit_core::constants::{
    DEFAULT_BOARD_GAP_IN, DEFAULT_BOARD_WIDTH_IN, DEFAULT_JOIST_SPACING_OC_IN,
    DEFAULT_WASTE_FACTOR, INCHES_PER_FOOT,
};
use deckkit_core::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the deck takeoff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TakeoffParameters {
    /// Width of one deck board (in)
    pub board_width_in: f64,
    /// Gap between adjacent boards (in)
    pub board_gap_in: f64,
    /// Joist spacing, on center (in)
    pub joist_spacing_oc_in: f64,
    /// Joists turned 90 degrees, which also turns the boards
    pub joists_rotated: bool,
    /// Multiplier applied to the clip count, 1.0 for no waste
    pub waste_factor: f64,
}

impl Default for TakeoffParameters {
    fn default() -> Self {
        Self {
            board_width_in: DEFAULT_BOARD_WIDTH_IN,
            board_gap_in: DEFAULT_BOARD_GAP_IN,
            joist_spacing_oc_in: DEFAULT_JOIST_SPACING_OC_IN,
            joists_rotated: false,
            waste_factor: DEFAULT_WASTE_FACTOR,
        }
    }
}

impl TakeoffParameters {
    /// Board width plus gap (in).
    pub fn module_in(&self) -> f64 {
        self.board_width_in + self.board_gap_in
    }

    /// Board width plus gap (ft).
    pub fn module_ft(&self) -> f64 {
        self.module_in() / INCHES_PER_FOOT
    }

    /// Checks that every value is in its meaningful range.
    ///
    /// The calculator accepts any input and clamps its divisors, so this is
    /// guidance for whoever collects the values, not a precondition.
    pub fn validate(&self) -> Result<()> {
        if !self.board_width_in.is_finite() || self.board_width_in <= 0.0 {
            return Err(DeckError::invalid_parameter(
                "board_width_in",
                format!("must be a positive number, got {}", self.board_width_in),
            ));
        }

        if !self.board_gap_in.is_finite() || self.board_gap_in < 0.0 {
            return Err(DeckError::invalid_parameter(
                "board_gap_in",
                format!("must be zero or more, got {}", self.board_gap_in),
            ));
        }

        if !self.joist_spacing_oc_in.is_finite() || self.joist_spacing_oc_in <= 0.0 {
            return Err(DeckError::invalid_parameter(
                "joist_spacing_oc_in",
                format!("must be a positive number, got {}", self.joist_spacing_oc_in),
            ));
        }

        if !self.waste_factor.is_finite() || self.waste_factor < 1.0 {
            return Err(DeckError::invalid_parameter(
                "waste_factor",
                format!("must be at least 1, got {}", self.waste_factor),
            ));
        }

        Ok(())
    }
}
