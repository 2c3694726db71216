//! Polygon editor for the deck outline.
//!
//! Owns the ordered vertex list, the active grid resolution and the
//! [`EditSession`]. Every mutation goes through one of the operations below;
//! each snaps what it writes to the current grid and reports whether the
//! outline changed. Invalid requests are logged and ignored.

mod events;
mod session;

pub use events::EditorEvent;
pub use session::{ClickLatch, EdgeLengthEdit, EditSession};

use deckkit_core::constants::{DEFAULT_DECK_HEIGHT_FT, DEFAULT_DECK_WIDTH_FT};
use deckkit_core::units::round_to;
use deckkit_core::DeckError;
use tracing::{debug, warn};

use crate::geometry::{
    adjust_segment_endpoint, edge, edges, polygon_area_and_perimeter, Edge, PolygonMetrics,
};
use crate::grid::GridResolution;
use crate::model::{rectangle_outline, Point};

/// Grid-snapped editor for a single deck outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonEditor {
    vertices: Vec<Point>,
    grid: GridResolution,
    session: EditSession,
}

impl PolygonEditor {
    /// Creates an editor holding the default 20' x 13' rectangle on a 12" grid.
    pub fn new() -> Self {
        Self::with_vertices(
            rectangle_outline(DEFAULT_DECK_WIDTH_FT, DEFAULT_DECK_HEIGHT_FT),
            GridResolution::default(),
        )
    }

    /// Creates an editor for an existing outline. Vertices are taken as-is, not re-snapped.
    pub fn with_vertices(vertices: Vec<Point>, grid: GridResolution) -> Self {
        Self {
            vertices,
            grid,
            session: EditSession::new(),
        }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `index`, or an error naming the valid range.
    pub fn vertex(&self, index: usize) -> deckkit_core::Result<Point> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(DeckError::VertexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    pub fn grid_resolution(&self) -> GridResolution {
        self.grid
    }

    /// Changes the snap step for future edits. Existing vertices keep their coordinates.
    pub fn set_grid_resolution(&mut self, grid: GridResolution) {
        debug!("Grid resolution {} -> {}", self.grid, grid);
        self.grid = grid;
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Area, perimeter and bounds of the current outline.
    pub fn metrics(&self) -> PolygonMetrics {
        polygon_area_and_perimeter(&self.vertices)
    }

    /// Drawable edges of the current outline.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        edges(&self.vertices)
    }

    /// Appends a vertex at `point` (feet), snapped to the grid.
    ///
    /// Ignored while the length editor is open, and exactly once right after a
    /// drag was released.
    pub fn add_vertex(&mut self, point: Point) -> bool {
        if self.session.click_latch.take() {
            debug!("Click after drag release swallowed");
            return false;
        }
        if self.session.edge_edit.is_some() {
            debug!("Click ignored while editing an edge length");
            return false;
        }

        let snapped = self.grid.snap(point);
        debug!("Adding vertex {} at ({}, {})", self.vertices.len(), snapped.x, snapped.y);
        self.vertices.push(snapped);
        true
    }

    /// Selects vertex `index` and starts dragging it.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.vertices.len() {
            warn!(
                "Cannot drag vertex {}: outline has {} vertices",
                index,
                self.vertices.len()
            );
            return false;
        }
        self.session.selected = Some(index);
        self.session.dragging = true;
        true
    }

    /// Moves the dragged vertex to `point` (feet), snapped. No-op when not dragging.
    pub fn update_drag(&mut self, point: Point) -> bool {
        if !self.session.dragging {
            return false;
        }
        let Some(index) = self.session.selected else {
            return false;
        };
        let Some(vertex) = self.vertices.get_mut(index) else {
            return false;
        };

        let snapped = self.grid.snap(point);
        if *vertex == snapped {
            return false;
        }
        *vertex = snapped;
        true
    }

    /// Finishes a drag. Arms the click latch if a drag was in progress.
    pub fn end_drag(&mut self) {
        if self.session.dragging {
            self.session.click_latch.arm();
        }
        self.session.dragging = false;
        self.session.selected = None;
    }

    /// Removes the vertex closest to `cursor` (feet) if it lies within half a grid step.
    ///
    /// Returns the index of the removed vertex. Ties go to the lowest index.
    pub fn delete_near(&mut self, cursor: Point) -> Option<usize> {
        let (index, distance) = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_to(&cursor)))
            .fold(None, |best: Option<(usize, f64)>, (i, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((i, d)),
            })?;

        if distance.is_nan() || distance > self.grid.pick_radius() {
            debug!(
                "Nearest vertex {} is {:.3} ft away, outside pick radius",
                index, distance
            );
            return None;
        }

        self.vertices.remove(index);
        match self.session.selected {
            Some(s) if s == index => {
                self.session.selected = None;
                self.session.dragging = false;
            }
            Some(s) if s > index => self.session.selected = Some(s - 1),
            _ => {}
        }
        debug!("Deleted vertex {}", index);
        Some(index)
    }

    /// Splits edge `edge_index` by inserting its snapped midpoint right after vertex `edge_index`.
    pub fn insert_midpoint(&mut self, edge_index: usize) -> bool {
        let Some(e) = edge(&self.vertices, edge_index) else {
            warn!(
                "Cannot split edge {}: outline has {} vertices",
                edge_index,
                self.vertices.len()
            );
            return false;
        };

        let midpoint = self.grid.snap(e.midpoint());
        self.vertices.insert(edge_index + 1, midpoint);
        if let Some(s) = self.session.selected {
            if s > edge_index {
                self.session.selected = Some(s + 1);
            }
        }
        debug!("Inserted midpoint as vertex {}", edge_index + 1);
        true
    }

    /// Resizes edge `edge_index` to `new_length` feet by moving its end vertex.
    ///
    /// The start vertex is the anchor and the edge keeps its direction; the
    /// moved vertex is snapped, so the final length may differ slightly. No
    /// other vertex moves. Lengths that are not positive and finite are ignored.
    pub fn set_edge_length(&mut self, edge_index: usize, new_length: f64) -> bool {
        if self.vertices.len() < 2 || !new_length.is_finite() || new_length <= 0.0 {
            debug!("Ignoring edge length {} for edge {}", new_length, edge_index);
            return false;
        }
        let Some(e) = edge(&self.vertices, edge_index) else {
            warn!("Edge {} does not exist", edge_index);
            return false;
        };

        let end_index = (edge_index + 1) % self.vertices.len();
        let moved = self
            .grid
            .snap(adjust_segment_endpoint(e.start, e.end, new_length));
        self.vertices[end_index] = moved;
        debug!(
            "Edge {} resized to {} ft, vertex {} now at ({}, {})",
            edge_index, new_length, end_index, moved.x, moved.y
        );
        true
    }

    /// Removes every vertex and ends any drag or length edit in progress.
    pub fn clear(&mut self) {
        debug!("Clearing {} vertices", self.vertices.len());
        self.vertices.clear();
        self.session.selected = None;
        self.session.dragging = false;
        self.session.edge_edit = None;
    }

    /// Opens the length editor on `edge_index`, seeded with the current length.
    pub fn open_edge_edit(&mut self, edge_index: usize) -> bool {
        let Some(e) = edge(&self.vertices, edge_index) else {
            warn!("Cannot edit length of missing edge {}", edge_index);
            return false;
        };
        self.session.edge_edit = Some(EdgeLengthEdit {
            edge_index,
            pending: Some(round_to(e.length(), 2)),
            anchor: e.midpoint(),
        });
        true
    }

    /// Replaces the pending value of the open length editor.
    pub fn set_pending_length(&mut self, value: Option<f64>) {
        if let Some(edit) = self.session.edge_edit.as_mut() {
            edit.pending = value;
        }
    }

    /// Parses typed text into the pending value. Text that is not a number clears it.
    pub fn set_pending_length_text(&mut self, text: &str) {
        self.set_pending_length(text.trim().parse::<f64>().ok());
    }

    /// Applies the pending length and closes the editor.
    ///
    /// The editor closes even when the value is rejected.
    pub fn commit_edge_edit(&mut self) -> bool {
        let Some(edit) = self.session.edge_edit.take() else {
            return false;
        };
        match edit.pending {
            Some(length) => self.set_edge_length(edit.edge_index, length),
            None => {
                debug!("Length editor closed without a numeric value");
                false
            }
        }
    }

    /// Closes the length editor without touching the outline.
    pub fn cancel_edge_edit(&mut self) {
        self.session.edge_edit = None;
    }
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self::new()
    }
}
