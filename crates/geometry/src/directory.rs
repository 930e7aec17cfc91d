//! The lookup contract consumed by tally filters.

/// Two-way lookup between user surface identifiers and dense indices.
///
/// Implementations are immutable once handed out, which is why the trait
/// requires `Send + Sync`: transport workers share one directory without
/// locking.
pub trait SurfaceDirectory: Send + Sync {
    /// Returns the dense index of the surface with user identifier `id`.
    fn resolve(&self, id: i32) -> Option<usize>;

    /// Returns the user identifier of the surface at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by [`resolve`](Self::resolve) on
    /// this directory.
    fn describe(&self, index: usize) -> i32;

    /// Returns the number of surfaces.
    fn len(&self) -> usize;

    /// Returns `true` if the directory holds no surfaces.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
