//! Error handling for DeckKit
//!
//! The editing and takeoff pipeline is total: edits that cannot apply are
//! no-ops and the calculator always produces a number. Errors exist for the
//! places where a caller explicitly asks for validation:
//! - Grid resolution selection from a raw inch value
//! - Takeoff parameter validation for user guidance
//! - Index lookups requested by the presentation layer
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// DeckKit error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    /// Grid step is not one of the supported resolutions
    #[error("Unsupported grid resolution: {inches} in (expected 6, 12, 24, 36 or 48)")]
    UnsupportedGridResolution {
        /// The rejected step in inches.
        inches: f64,
    },

    /// A takeoff or sketch parameter is outside its meaningful range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Vertex index does not exist in the outline
    #[error("Vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of vertices in the outline.
        len: usize,
    },

}

impl DeckError {
    /// Shorthand for [`DeckError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for DeckKit operations
pub type Result<T> = std::result::Result<T, DeckError>;
