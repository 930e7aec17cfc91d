//! Reading filter records back from statepoint files.

use std::path::Path;

use netcdf::AttributeValue;

use crate::error::StatepointError;
use crate::writer::filter_group_name;

/// A filter record as stored in a statepoint file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRecord {
    /// Filter type name, e.g. `"surface"`.
    pub filter_type: String,
    /// Number of bins.
    pub n_bins: usize,
    /// The `bins` dataset. For surface filters these are user surface
    /// identifiers, ready to configure a new filter on restart.
    pub bins: Vec<i32>,
}

/// Read the record of filter `filter_id` from the statepoint at `path`.
///
/// # Errors
///
/// Returns [`StatepointError::FileNotFound`] if `path` does not exist,
/// [`StatepointError::MissingGroup`] if the filter has no group, and
/// [`StatepointError::InvalidAttribute`] if `type` or `n_bins` is missing or
/// mistyped or if `n_bins` disagrees with the length of `bins`. A group
/// without a `bins` dataset has an empty `bins`.
pub fn read_filter_record(path: &Path, filter_id: u32) -> Result<FilterRecord, StatepointError> {
    if !path.exists() {
        return Err(StatepointError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = netcdf::open(path)?;
    let name = filter_group_name(filter_id);
    let group = file
        .group(&name)?
        .ok_or_else(|| StatepointError::MissingGroup {
            name: name.clone(),
            path: path.to_path_buf(),
        })?;

    let attr = |attr_name: &str| -> Result<AttributeValue, StatepointError> {
        let invalid = |reason: String| StatepointError::InvalidAttribute {
            name: attr_name.to_string(),
            group: name.clone(),
            reason,
        };
        group
            .attribute(attr_name)
            .ok_or_else(|| invalid("missing".to_string()))?
            .value()
            .map_err(|e| invalid(e.to_string()))
    };

    let filter_type = match attr("type")? {
        AttributeValue::Str(s) => s,
        other => {
            return Err(StatepointError::InvalidAttribute {
                name: "type".to_string(),
                group: name.clone(),
                reason: format!("expected a string, got {other:?}"),
            });
        }
    };
    let n_bins = match attr("n_bins")? {
        AttributeValue::Int(n) if n >= 0 => n as usize,
        other => {
            return Err(StatepointError::InvalidAttribute {
                name: "n_bins".to_string(),
                group: name.clone(),
                reason: format!("expected a non-negative int, got {other:?}"),
            });
        }
    };

    let bins = match group.variable("bins") {
        Some(var) if var.dimensions().iter().all(|d| d.len() > 0) => {
            var.get_values::<i32, _>(..)?
        }
        _ => Vec::new(),
    };
    if bins.len() != n_bins {
        return Err(StatepointError::InvalidAttribute {
            name: "n_bins".to_string(),
            group: name,
            reason: format!("n_bins is {n_bins} but bins holds {} values", bins.len()),
        });
    }

    Ok(FilterRecord {
        filter_type,
        n_bins,
        bins,
    })
}
