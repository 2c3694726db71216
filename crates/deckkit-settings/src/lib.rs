//! DeckKit Settings Crate
//!
//! Loads, validates and saves the DeckKit configuration file.

pub mod config;
pub mod error;

pub use config::{Config, SketchSettings};
pub use error::{SettingsError, SettingsResult};
