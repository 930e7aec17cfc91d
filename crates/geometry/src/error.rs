//! Error types for the surftally-geometry crate.

/// Error type for all fallible operations in the surftally-geometry crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// Returned when two surfaces share the same user identifier.
    #[error("two or more surfaces use the same unique ID: {id}")]
    DuplicateSurfaceId {
        /// The repeated identifier.
        id: i32,
    },

    /// Returned when a surface identifier is zero or negative.
    #[error("invalid surface ID: {id} (must be positive)")]
    InvalidSurfaceId {
        /// The rejected identifier.
        id: i32,
    },
}
