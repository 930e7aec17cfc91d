//! Loaded model: surface directory plus initialized filters.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use surftally_filter::{Filter, SurfaceFilter};
use surftally_geometry::SurfaceDirectory;
use tracing::info;

use crate::config::{ModelConfig, StatepointToml};
use crate::convert;

/// Filters ready for scoring, in configuration order.
pub struct Model {
    statepoint: StatepointToml,
    filters: Vec<(u32, SurfaceFilter)>,
}

impl Model {
    /// Reads the model file and initializes every filter.
    ///
    /// Any surface a filter names that the geometry does not define aborts
    /// the load.
    pub fn load(path: &Path) -> Result<Self> {
        let config = ModelConfig::load(path)?;
        Self::from_config(config)
    }

    pub fn from_config(config: ModelConfig) -> Result<Self> {
        let registry = convert::build_registry(&config.surfaces)?;
        info!(n_surfaces = registry.len(), "surfaces loaded");
        let directory: Arc<dyn SurfaceDirectory> = Arc::new(registry);

        let mut seen = BTreeSet::new();
        let mut filters = Vec::with_capacity(config.filters.len());
        for filter_toml in &config.filters {
            if !seen.insert(filter_toml.id) {
                bail!("two or more filters use the same unique ID: {}", filter_toml.id);
            }
            let filter_cfg = convert::build_surface_filter_config(filter_toml)?;
            let filter = SurfaceFilter::initialize(filter_cfg, Arc::clone(&directory))
                .with_context(|| format!("failed to initialize filter {}", filter_toml.id))?;
            info!(filter = filter_toml.id, n_bins = filter.n_bins(), "filter initialized");
            filters.push((filter_toml.id, filter));
        }

        Ok(Self {
            statepoint: config.statepoint,
            filters,
        })
    }

    /// Returns the `[statepoint]` table of the model file.
    pub fn statepoint(&self) -> &StatepointToml {
        &self.statepoint
    }

    /// Iterates over `(id, filter)` pairs in configuration order.
    pub fn filters(&self) -> impl Iterator<Item = (u32, &SurfaceFilter)> {
        self.filters.iter().map(|(id, f)| (*id, f))
    }

    /// Returns the filter with user identifier `id`.
    pub fn filter(&self, id: u32) -> Result<&SurfaceFilter> {
        self.filters()
            .find(|&(fid, _)| fid == id)
            .map(|(_, f)| f)
            .ok_or_else(|| anyhow!("no filter with ID {id} in model"))
    }

    /// Returns the filters as trait objects for the statepoint writer.
    pub fn dyn_filters(&self) -> Vec<(u32, &dyn Filter)> {
        self.filters()
            .map(|(id, f)| (id, f as &dyn Filter))
            .collect()
    }
}
