//! Error types for surftally-statepoint.

use std::path::PathBuf;

/// Error type for all fallible operations in the surftally-statepoint crate.
#[derive(Debug, thiserror::Error)]
pub enum StatepointError {
    /// Returned when a statepoint file to read does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the output file exists and overwriting is disabled.
    #[error("refusing to overwrite existing file: {}", path.display())]
    FileExists {
        /// Path of the existing file.
        path: PathBuf,
    },

    /// Wraps an error originating from the netCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying netCDF failure.
        reason: String,
    },

    /// Wraps an error raised by a filter while writing its record.
    #[error("filter {id}: {reason}")]
    Filter {
        /// User identifier of the filter.
        id: u32,
        /// Description of the filter failure.
        reason: String,
    },

    /// Returned when a filter group is not present in the file.
    #[error("group '{name}' not found in {}", path.display())]
    MissingGroup {
        /// Name of the missing group.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a required attribute is missing or has the wrong type.
    #[error("attribute '{name}' in group '{group}': {reason}")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// Group holding the attribute.
        group: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<netcdf::Error> for StatepointError {
    fn from(e: netcdf::Error) -> Self {
        StatepointError::Netcdf {
            reason: e.to_string(),
        }
    }
}
