//! Sketch session shell.
//!
//! Owns the mutable state of one sketch: the polygon editor, the takeoff
//! parameters and the canvas size. Input events are routed to the editor;
//! readouts, takeoff and layout preview are recomputed from scratch on every
//! query.

use deckkit_core::DeckError;
use deckkit_designer::{
    deck_bounds, CanvasSize, EditorEvent, PixelMapping, PolygonEditor, SketchReadout,
};
use deckkit_settings::Config;
use deckkit_takeoff::{calculate, layout_preview, LayoutPreview, TakeoffParameters, TakeoffResult};
use tracing::{info, warn};

/// One deck sketch with its takeoff inputs
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSession {
    editor: PolygonEditor,
    parameters: TakeoffParameters,
    canvas: CanvasSize,
}

impl DeckSession {
    /// Session over the default 20' x 13' rectangle with default parameters.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let sketch = &config.sketch;
        info!(
            "Starting session: {} vertices on a {} grid",
            sketch.outline.len(),
            sketch.grid
        );
        Self {
            editor: PolygonEditor::with_vertices(sketch.outline.clone(), sketch.grid),
            parameters: config.takeoff,
            canvas: sketch.canvas,
        }
    }

    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut PolygonEditor {
        &mut self.editor
    }

    pub fn parameters(&self) -> &TakeoffParameters {
        &self.parameters
    }

    /// Replaces the takeoff parameters. Out-of-range values are accepted and logged.
    pub fn set_parameters(&mut self, parameters: TakeoffParameters) {
        if let Err(e) = parameters.validate() {
            warn!("Takeoff parameters out of range: {}", e);
        }
        self.parameters = parameters;
    }

    /// Validation message for the current parameters, if any.
    pub fn parameter_issue(&self) -> Option<DeckError> {
        self.parameters.validate().err()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Pixel mapping for the outline as currently drawn.
    pub fn mapping(&self) -> PixelMapping {
        PixelMapping::fit(self.editor.vertices(), &self.canvas)
    }

    /// Routes one input event to the editor, mapping pointer pixels with
    /// the current fit. Returns whether the outline changed.
    pub fn handle_event(&mut self, event: EditorEvent) -> bool {
        let mapping = self.mapping();
        self.editor.handle_event(event, &mapping)
    }

    pub fn readout(&self) -> SketchReadout {
        SketchReadout::from_points(self.editor.vertices())
    }

    pub fn takeoff(&self) -> TakeoffResult {
        calculate(self.editor.vertices(), &self.parameters)
    }

    pub fn layout(&self) -> LayoutPreview {
        let bounds = deck_bounds(&self.editor.metrics());
        layout_preview(bounds, &self.parameters)
    }
}

impl Default for DeckSession {
    fn default() -> Self {
        Self::new()
    }
}
