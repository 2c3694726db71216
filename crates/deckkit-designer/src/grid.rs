//! Snap grid resolutions.

use std::fmt;

use deckkit_core::units::{inches_to_feet, round_to};
use deckkit_core::DeckError;
use serde::{Deserialize, Serialize};

use crate::geometry::snap_to_grid;
use crate::model::Point;

/// Grid step used for every snapped coordinate while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GridResolution {
    /// 6 inch grid
    SixInch,
    /// 12 inch grid
    #[default]
    TwelveInch,
    /// 24 inch grid
    TwentyFourInch,
    /// 36 inch grid
    ThirtySixInch,
    /// 48 inch grid
    FortyEightInch,
}

impl GridResolution {
    /// All selectable resolutions, finest first.
    pub const ALL: [GridResolution; 5] = [
        Self::SixInch,
        Self::TwelveInch,
        Self::TwentyFourInch,
        Self::ThirtySixInch,
        Self::FortyEightInch,
    ];

    /// Step size in whole inches.
    pub fn inches(self) -> u32 {
        match self {
            Self::SixInch => 6,
            Self::TwelveInch => 12,
            Self::TwentyFourInch => 24,
            Self::ThirtySixInch => 36,
            Self::FortyEightInch => 48,
        }
    }

    /// Step size in feet.
    pub fn feet(self) -> f64 {
        inches_to_feet(self.inches() as f64)
    }

    /// Largest distance (feet) at which a cursor still picks a vertex.
    pub fn pick_radius(self) -> f64 {
        self.feet() / 2.0
    }

    /// Label shown next to the grid, e.g. `12" (1 ft)`.
    pub fn label(self) -> String {
        format!("{}\" ({} ft)", self.inches(), round_to(self.feet(), 2))
    }

    /// Snaps `point` to this grid.
    pub fn snap(self, point: Point) -> Point {
        snap_to_grid(point, self.inches() as f64)
    }

    /// Looks up the resolution for a step given in inches.
    pub fn from_inches(inches: f64) -> deckkit_core::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.inches() as f64 == inches)
            .ok_or(DeckError::UnsupportedGridResolution { inches })
    }
}

impl fmt::Display for GridResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<GridResolution> for u32 {
    fn from(grid: GridResolution) -> Self {
        grid.inches()
    }
}

impl TryFrom<u32> for GridResolution {
    type Error = DeckError;

    fn try_from(inches: u32) -> Result<Self, Self::Error> {
        Self::from_inches(inches as f64)
    }
}
