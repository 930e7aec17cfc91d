//! Surface filter: bins are surfaces, weights are crossing directions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use surftally_geometry::SurfaceDirectory;
use tracing::{debug, warn};

use crate::checkpoint::CheckpointRecord;
use crate::config::SurfaceFilterConfig;
use crate::crossing::SurfaceCrossing;
use crate::error::FilterError;
use crate::filter::{Filter, ParticleView, write_filter_header};
use crate::filter_match::FilterMatch;

/// Checkpoint type name of [`SurfaceFilter`].
pub const SURFACE_FILTER_TYPE: &str = "surface";

/// An initialized surface filter.
///
/// Holds the dense surface index of each bin (0-based internally) and the
/// reverse map `surface index -> bin`. Bins are 1-based everywhere they leave
/// this type. User identifiers are never stored; they are recovered through
/// the directory when writing checkpoints or labels.
///
/// If the same surface is listed more than once, only its last bin is
/// reachable through the reverse map. Earlier bins for that surface never
/// score.
pub struct SurfaceFilter {
    surfaces: Vec<usize>,
    map: HashMap<usize, usize>,
    directory: Arc<dyn SurfaceDirectory>,
}

impl SurfaceFilter {
    /// Resolves the configured identifiers and builds the reverse map.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::SurfaceNotFound`] for the first identifier the
    /// directory does not know. No filter is produced in that case.
    #[tracing::instrument(skip_all, fields(n_bins = config.n_bins()))]
    pub fn initialize(
        config: SurfaceFilterConfig,
        directory: Arc<dyn SurfaceDirectory>,
    ) -> Result<Self, FilterError> {
        let surfaces = config
            .into_bins()
            .into_iter()
            .map(|id| {
                directory
                    .resolve(id)
                    .ok_or(FilterError::SurfaceNotFound { id })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut map = HashMap::with_capacity(surfaces.len());
        for (bin, &index) in surfaces.iter().enumerate() {
            if let Some(shadowed) = map.insert(index, bin) {
                warn!(
                    surface = directory.describe(index),
                    shadowed_bin = shadowed + 1,
                    bin = bin + 1,
                    "surface listed twice on filter, earlier bin will never score"
                );
            }
        }
        debug!(n_surfaces = map.len(), "surface filter initialized");

        Ok(Self {
            surfaces,
            map,
            directory,
        })
    }

    /// Returns the dense surface index of every bin, in bin order.
    pub fn surfaces(&self) -> &[usize] {
        &self.surfaces
    }

    /// Returns the user identifier of every bin, in bin order.
    pub fn surface_ids(&self) -> Vec<i32> {
        self.surfaces
            .iter()
            .map(|&index| self.directory.describe(index))
            .collect()
    }

    /// Returns the 1-based bin that scores crossings of surface `index`.
    pub fn bin_for_surface(&self, index: usize) -> Option<usize> {
        self.map.get(&index).map(|&bin| bin + 1)
    }

    /// Appends the contribution of `crossing`, if its surface is tracked.
    ///
    /// An untracked surface or [`SurfaceCrossing::NONE`] appends nothing.
    pub fn match_crossing(&self, crossing: SurfaceCrossing, matched: &mut FilterMatch) {
        let (Some(index), Some(direction)) = (crossing.index(), crossing.direction()) else {
            return;
        };
        if let Some(&bin) = self.map.get(&index) {
            matched.push(bin + 1, direction.weight());
        }
    }
}

impl Filter for SurfaceFilter {
    fn filter_type(&self) -> &'static str {
        SURFACE_FILTER_TYPE
    }

    fn n_bins(&self) -> usize {
        self.surfaces.len()
    }

    fn get_all_bins(&self, particle: &dyn ParticleView, matched: &mut FilterMatch) {
        self.match_crossing(particle.surface_crossing(), matched);
    }

    fn to_statepoint(&self, record: &mut dyn CheckpointRecord) -> Result<(), FilterError> {
        write_filter_header(record, self)?;
        record.write_dataset("bins", &self.surface_ids())
    }

    /// # Panics
    ///
    /// Panics if `bin` is not in `1..=n_bins`.
    fn text_label(&self, bin: usize) -> String {
        format!(
            "Surface {}",
            self.directory.describe(self.surfaces[bin - 1])
        )
    }
}

impl fmt::Debug for SurfaceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceFilter")
            .field("surfaces", &self.surfaces)
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
