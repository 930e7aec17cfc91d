//! In-memory surface directory built at geometry load time.

use std::collections::HashMap;

use tracing::debug;

use crate::directory::SurfaceDirectory;
use crate::error::GeometryError;
use crate::surface::Surface;

/// Dense surface array plus an `id -> index` map.
///
/// Indices follow load order and never change after construction.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: Vec<Surface>,
    index: HashMap<i32, usize>,
}

impl SurfaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from surfaces in load order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSurfaceId`] for a non-positive
    /// identifier and [`GeometryError::DuplicateSurfaceId`] if an identifier
    /// appears twice.
    pub fn from_surfaces<I>(surfaces: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Surface>,
    {
        let mut registry = Self::new();
        for surface in surfaces {
            registry.push(surface)?;
        }
        debug!(n_surfaces = registry.len(), "surface registry built");
        Ok(registry)
    }

    /// Builds a registry of unnamed surfaces from identifiers in load order.
    ///
    /// # Errors
    ///
    /// Same as [`from_surfaces`](Self::from_surfaces).
    pub fn from_ids<I>(ids: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = i32>,
    {
        Self::from_surfaces(ids.into_iter().map(Surface::new))
    }

    /// Appends a surface and returns its dense index.
    ///
    /// # Errors
    ///
    /// Same as [`from_surfaces`](Self::from_surfaces). The registry is left
    /// unchanged on error.
    pub fn push(&mut self, surface: Surface) -> Result<usize, GeometryError> {
        let id = surface.id();
        if id <= 0 {
            return Err(GeometryError::InvalidSurfaceId { id });
        }
        if self.index.contains_key(&id) {
            return Err(GeometryError::DuplicateSurfaceId { id });
        }
        let idx = self.surfaces.len();
        self.index.insert(id, idx);
        self.surfaces.push(surface);
        Ok(idx)
    }

    /// Returns the surface at `index`.
    pub fn get(&self, index: usize) -> Option<&Surface> {
        self.surfaces.get(index)
    }

    /// Iterates over surfaces in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter()
    }
}

impl SurfaceDirectory for SurfaceRegistry {
    fn resolve(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    fn describe(&self, index: usize) -> i32 {
        self.surfaces[index].id()
    }

    fn len(&self) -> usize {
        self.surfaces.len()
    }
}
