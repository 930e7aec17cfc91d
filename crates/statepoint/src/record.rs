//! netCDF-4 group backend for filter checkpoint records.

use surftally_filter::{CheckpointRecord, FilterError};

/// A [`CheckpointRecord`] writing into one netCDF-4 group.
///
/// Attributes become group attributes. A dataset `name` becomes a 1-D `int`
/// variable over a dimension of the same name; an empty dataset gets a
/// zero-length (unlimited) dimension and no values.
pub struct NetcdfRecord<'f> {
    group: netcdf::GroupMut<'f>,
}

impl<'f> NetcdfRecord<'f> {
    /// Wraps an already created group.
    pub fn new(group: netcdf::GroupMut<'f>) -> Self {
        Self { group }
    }
}

fn checkpoint_err(e: netcdf::Error) -> FilterError {
    FilterError::Checkpoint {
        reason: e.to_string(),
    }
}

impl CheckpointRecord for NetcdfRecord<'_> {
    fn write_str_attribute(&mut self, name: &str, value: &str) -> Result<(), FilterError> {
        self.group
            .add_attribute(name, value)
            .map_err(checkpoint_err)?;
        Ok(())
    }

    fn write_int_attribute(&mut self, name: &str, value: i32) -> Result<(), FilterError> {
        self.group
            .add_attribute(name, value)
            .map_err(checkpoint_err)?;
        Ok(())
    }

    fn write_dataset(&mut self, name: &str, values: &[i32]) -> Result<(), FilterError> {
        self.group
            .add_dimension(name, values.len())
            .map_err(checkpoint_err)?;
        let mut var = self
            .group
            .add_variable::<i32>(name, &[name])
            .map_err(checkpoint_err)?;
        if !values.is_empty() {
            var.put_values(values, ..).map_err(checkpoint_err)?;
        }
        Ok(())
    }
}
