//! Configuration Management
//!
//! The configuration holds the startup state of a sketch session: grid
//! resolution, starting outline, canvas size and takeoff parameters. Files
//! are JSON or TOML, chosen by extension.

use std::path::{Path, PathBuf};

use deckkit_core::constants::{DEFAULT_DECK_HEIGHT_FT, DEFAULT_DECK_WIDTH_FT};
use deckkit_core::DeckError;
use deckkit_designer::{rectangle_outline, CanvasSize, GridResolution, Point};
use deckkit_takeoff::TakeoffParameters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Sketch canvas and starting outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Snap step (inches)
    pub grid: GridResolution,
    pub canvas: CanvasSize,
    /// Outline loaded when a session starts (feet)
    pub outline: Vec<Point>,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            grid: GridResolution::default(),
            canvas: CanvasSize::default(),
            outline: rectangle_outline(DEFAULT_DECK_WIDTH_FT, DEFAULT_DECK_HEIGHT_FT),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sketch: SketchSettings,
    pub takeoff: TakeoffParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/deckkit/config.toml` for the current platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("deckkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, or returns the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            info!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating the parent directory.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let canvas = &self.sketch.canvas;
        if !canvas.padding.is_finite() || canvas.padding < 0.0 {
            return Err(DeckError::invalid_parameter(
                "sketch.canvas.padding",
                format!("must be zero or more, got {}", canvas.padding),
            )
            .into());
        }
        if !(canvas.inner_width() > 0.0 && canvas.inner_height() > 0.0) {
            return Err(DeckError::invalid_parameter(
                "sketch.canvas",
                format!(
                    "{} x {} px leaves no room inside {} px padding",
                    canvas.width, canvas.height, canvas.padding
                ),
            )
            .into());
        }

        if let Some(index) = self
            .sketch
            .outline
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(DeckError::invalid_parameter(
                "sketch.outline",
                format!("vertex {} is not a finite point", index),
            )
            .into());
        }

        self.takeoff.validate()?;
        Ok(())
    }
}
