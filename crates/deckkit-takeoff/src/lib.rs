//! # DeckKit Takeoff
//!
//! Derives material quantities for a deck outline: board rows across the
//! deck, joist count, fastening clips with and without waste, and a
//! parametric layout preview of boards and joists.
//!
//! Everything here is a pure function of the outline bounds and the
//! [`TakeoffParameters`]. Results are recomputed on every call and never
//! cached.
//!
//! ## Usage
//!
//! ```rust
//! use deckkit_designer::BoundingBox;
//! use deckkit_takeoff::{calculate_for_bounds, TakeoffParameters};
//!
//! let result = calculate_for_bounds(BoundingBox::new(20.0, 13.0), 260.0, &TakeoffParameters::default());
//! assert_eq!(result.board_rows_across, 27);
//! assert_eq!(result.joist_count, 10);
//! ```

pub mod calculator;
pub mod layout;
pub mod orientation;
pub mod parameters;

pub use calculator::{
    board_rows_across, calculate, calculate_for_bounds, clips_with_waste, joist_count,
    TakeoffResult,
};
pub use layout::{
    layout_preview, BoardStripe, JoistLine, LayoutAxis, LayoutPreview, MAX_PREVIEW_LINES,
};
pub use orientation::{BoardDirection, DeckSpans};
pub use parameters::TakeoffParameters;
