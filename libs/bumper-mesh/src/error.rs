//! # Mesh Errors
//!
//! Error types for bumper mesh generation.
//!
//! ## Error Policy
//!
//! - Degenerate geometry is detected before any square root or normalization;
//!   no NaN ever reaches the buffers
//! - Per-bumper geometry problems degrade the frame (the piece is skipped and
//!   reported) instead of failing the rebuild
//! - Contract violations in the graph fail fast at construction

use bumper_graph::GraphError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Graph contract violation
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Geometry with no well-defined tangent surface
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Too many vertices for one rebuild
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Returns true for [`MeshError::DegenerateGeometry`].
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
