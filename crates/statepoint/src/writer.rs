//! Statepoint file creation.

use std::path::Path;

use surftally_filter::Filter;
use tracing::{debug, info};

use crate::error::StatepointError;
use crate::record::NetcdfRecord;

/// Configuration for writing statepoint files.
#[derive(Debug, Clone, Default)]
pub struct StatepointConfig {
    /// Replace an existing file at the output path.
    overwrite: bool,
}

impl StatepointConfig {
    /// Sets whether an existing output file may be replaced.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Returns whether an existing output file may be replaced.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

/// Name of the group holding the record of filter `id`.
pub fn filter_group_name(id: u32) -> String {
    format!("filter_{id}")
}

/// Write the checkpoint records of `filters` to a new statepoint file.
///
/// Each entry pairs the user identifier of a filter with the filter itself.
///
/// # Errors
///
/// Returns [`StatepointError::FileExists`] if `path` exists and overwriting is
/// disabled, [`StatepointError::Filter`] if a filter fails to write its
/// record, or [`StatepointError::Netcdf`] for file-level failures. On error
/// no partial file is left at `path`.
pub fn write_statepoint(
    path: &Path,
    filters: &[(u32, &dyn Filter)],
    config: &StatepointConfig,
) -> Result<(), StatepointError> {
    if path.exists() && !config.overwrite {
        return Err(StatepointError::FileExists {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), n_filters = filters.len(), "writing statepoint");
    let result = write_records(path, filters);
    if result.is_err() {
        // Best effort; the write error is the one worth reporting.
        let _ = std::fs::remove_file(path);
    }
    result
}

fn write_records(path: &Path, filters: &[(u32, &dyn Filter)]) -> Result<(), StatepointError> {
    let mut file = netcdf::create(path)?;
    file.add_attribute("filetype", "statepoint")?;
    file.add_attribute("version", env!("CARGO_PKG_VERSION"))?;

    for &(id, filter) in filters {
        let name = filter_group_name(id);
        let group = file.add_group(&name)?;
        let mut record = NetcdfRecord::new(group);
        filter
            .to_statepoint(&mut record)
            .map_err(|e| StatepointError::Filter {
                id,
                reason: e.to_string(),
            })?;
        debug!(
            group = %name,
            filter_type = filter.filter_type(),
            n_bins = filter.n_bins(),
            "filter record written"
        );
    }

    Ok(())
}
