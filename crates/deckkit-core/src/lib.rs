//! # DeckKit Core
//!
//! Core types and utilities shared by the DeckKit crates.
//! Provides the error taxonomy, unit conversion and display formatting,
//! and the constants that define the default sketch and canvas.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{DeckError, Result};
pub use units::{
    format_feet, format_inches_fraction, inches_to_feet, round_half_up, round_to,
};
