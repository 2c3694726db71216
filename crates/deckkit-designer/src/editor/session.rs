//! Transient interaction state: selection, drag, length editor and the click latch.

use crate::model::Point;

/// Swallows the click that a pointer release produces after a drag.
///
/// A drag and a click are mutually exclusive per gesture. Releasing a drag
/// arms the latch; the next canvas click disarms it instead of adding a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickLatch {
    #[default]
    Disarmed,
    Armed,
}

impl ClickLatch {
    pub fn arm(&mut self) {
        *self = Self::Armed;
    }

    /// Disarms the latch, returning whether it was armed.
    pub fn take(&mut self) -> bool {
        std::mem::take(self) == Self::Armed
    }

    pub fn is_armed(&self) -> bool {
        *self == Self::Armed
    }
}

/// Open in-place editor for the length of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengthEdit {
    pub edge_index: usize,
    /// Parsed value typed so far, `None` while the text is not a number
    pub pending: Option<f64>,
    /// Midpoint of the edge, where the editor is shown
    pub anchor: Point,
}

/// Per-gesture UI state. Every field is cleared when its interaction ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    pub(crate) selected: Option<usize>,
    pub(crate) dragging: bool,
    pub(crate) edge_edit: Option<EdgeLengthEdit>,
    pub(crate) click_latch: ClickLatch,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the vertex being dragged.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn edge_edit(&self) -> Option<&EdgeLengthEdit> {
        self.edge_edit.as_ref()
    }

    pub fn click_latch(&self) -> ClickLatch {
        self.click_latch
    }
}
