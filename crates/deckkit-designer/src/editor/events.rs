//! Input events from the sketch canvas and their dispatch onto the editor.

use tracing::trace;

use super::PolygonEditor;
use crate::grid::GridResolution;
use crate::viewport::PixelMapping;

/// Discrete user input delivered by the presentation layer.
///
/// Pointer positions are canvas pixels; the editor converts them with the
/// [`PixelMapping`] passed to [`PolygonEditor::handle_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Pointer pressed on the handle of vertex `index`
    VertexPressed { index: usize },
    /// Pointer moved over the canvas
    PointerMoved { x: f64, y: f64 },
    /// Pointer button released
    PointerReleased,
    /// Pointer left the canvas
    PointerLeft,
    /// Primary click on empty canvas
    CanvasClicked { x: f64, y: f64 },
    /// Secondary (context) click on the canvas
    ContextClicked { x: f64, y: f64 },
    /// Click on the body of edge `index`
    EdgeClicked { index: usize },
    /// Click on the length label of edge `index`
    LengthLabelClicked { index: usize },
    /// Text typed into the length editor
    LengthInput(String),
    /// Enter pressed or the length editor lost focus
    LengthCommitted,
    /// Escape pressed in the length editor
    LengthCancelled,
    /// Clear button
    Cleared,
    /// Grid selector changed
    GridChanged(GridResolution),
}

impl PolygonEditor {
    /// Applies one input event. Returns whether the outline changed.
    pub fn handle_event(&mut self, event: EditorEvent, mapping: &PixelMapping) -> bool {
        trace!("Editor event {:?}", event);
        match event {
            EditorEvent::VertexPressed { index } => {
                self.begin_drag(index);
                false
            }
            EditorEvent::PointerMoved { x, y } => self.update_drag(mapping.to_feet(x, y)),
            EditorEvent::PointerReleased | EditorEvent::PointerLeft => {
                self.end_drag();
                false
            }
            EditorEvent::CanvasClicked { x, y } => self.add_vertex(mapping.to_feet(x, y)),
            EditorEvent::ContextClicked { x, y } => {
                self.delete_near(mapping.to_feet(x, y)).is_some()
            }
            EditorEvent::EdgeClicked { index } => self.insert_midpoint(index),
            EditorEvent::LengthLabelClicked { index } => {
                self.open_edge_edit(index);
                false
            }
            EditorEvent::LengthInput(text) => {
                self.set_pending_length_text(&text);
                false
            }
            EditorEvent::LengthCommitted => self.commit_edge_edit(),
            EditorEvent::LengthCancelled => {
                self.cancel_edge_edit();
                false
            }
            EditorEvent::Cleared => {
                let had_vertices = self.vertex_count() > 0;
                self.clear();
                had_vertices
            }
            EditorEvent::GridChanged(grid) => {
                self.set_grid_resolution(grid);
                false
            }
        }
    }
}
