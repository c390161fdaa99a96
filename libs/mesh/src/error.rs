//! # Mesh Errors
//!
//! Error types for mesh generation and boolean operations.

use thiserror::Error;

/// Errors that can occur while building meshes.
#[derive(Debug, Clone, Error)]
pub enum MeshError {
    /// Parameters describe degenerate geometry (non-positive sizes, too few
    /// teeth, ...).
    #[error("Degenerate geometry: {0}")]
    Degenerate(String),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate(message.into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
