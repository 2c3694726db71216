//! # DeckKit
//!
//! Deck outline sketching and fastener takeoff.
//!
//! ## Architecture
//!
//! DeckKit is organized as a workspace with multiple crates:
//!
//! 1. **deckkit-core** - Errors, units and shared constants
//! 2. **deckkit-designer** - Geometry kernel, grid snapping, polygon editor
//! 3. **deckkit-takeoff** - Board row, joist and clip counts, layout preview
//! 4. **deckkit-settings** - Configuration files
//! 5. **deckkit** - Session shell and binary that integrate all crates
//!
//! Input events flow into [`DeckSession`], which mutates the outline through
//! the editor and recomputes readouts and takeoff on demand.

pub mod session;

pub use deckkit_core::{DeckError, Result};
pub use deckkit_designer::{
    BoundingBox, CanvasSize, EditorEvent, GridResolution, PixelMapping, Point, PolygonEditor,
    SketchReadout,
};
pub use deckkit_settings::{Config, SettingsError, SketchSettings};
pub use deckkit_takeoff::{LayoutPreview, TakeoffParameters, TakeoffResult};
pub use session::DeckSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr, filtered by `RUST_LOG` on top of a default INFO level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
