//! Geometry error types.

/// Errors reported for misuse of the geometry API.
///
/// Numerically degenerate geometry is never an error; these variants only
/// cover arguments that no caller should pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A component index outside `0..=2` was passed to an AABB accessor.
    #[error("invalid component index: {0} (expected 0, 1 or 2)")]
    InvalidComponent(usize),

    /// The vertex count does not fit the interleaved coordinate slice.
    #[error("vertex count {count} exceeds the {available} vertices in the coordinate slice")]
    VertexCountMismatch {
        /// Requested vertex count.
        count: usize,
        /// Complete `(x, y)` pairs available in the slice.
        available: usize,
    },

    /// A polygon needs at least three vertices.
    #[error("polygon has {0} vertices, at least 3 are required")]
    DegeneratePolygon(usize),

    /// A byte buffer is shorter than the fixed layout of the decoded type.
    #[error("data truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Byte count of the fixed layout.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
}
