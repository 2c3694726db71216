//! # DeckKit Designer
//!
//! Sketching of deck outlines on a snapping grid.
//!
//! ## Core Components
//!
//! - **Geometry**: area, perimeter and bounds of an outline, grid snapping,
//!   segment resizing
//! - **Grid**: the selectable snap resolutions (6, 12, 24, 36, 48 in)
//! - **Viewport**: pixel <-> feet mapping for the sketch canvas
//! - **Editor**: the vertex list and its grid-snapped edit operations,
//!   driven by discrete input events
//! - **Readout**: area, perimeter and bounding dimensions for display
//!
//! ## Architecture
//!
//! ```text
//! EditorEvent (pixels)
//!   └── PolygonEditor (state machine, feet)
//!         ├── Grid (snapping)
//!         └── Geometry (pure functions)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use deckkit_designer::{EditorEvent, PixelMapping, PolygonEditor, CanvasSize};
//!
//! let mut editor = PolygonEditor::new();
//! let mapping = PixelMapping::fit(editor.vertices(), &CanvasSize::default());
//! editor.handle_event(EditorEvent::EdgeClicked { index: 0 }, &mapping);
//! assert_eq!(editor.vertex_count(), 5);
//! ```

pub mod editor;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod readout;
pub mod viewport;

pub use editor::{ClickLatch, EdgeLengthEdit, EditSession, EditorEvent, PolygonEditor};
pub use geometry::{
    adjust_segment_endpoint, edge_count, edges, polygon_area_and_perimeter, snap_to_grid,
    BoundingBox, Edge, PolygonMetrics,
};
pub use grid::GridResolution;
pub use model::{rectangle_outline, Point};
pub use readout::{deck_bounds, SketchReadout};
pub use viewport::{CanvasSize, PixelMapping, SketchExtent};
