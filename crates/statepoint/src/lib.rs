//! # surftally-statepoint
//!
//! Write tally filter checkpoint records to netCDF-4 statepoint files and read
//! them back for analysis or restart.
//!
//! Each filter gets its own group, `filter_<id>`, holding a `type` and an
//! `n_bins` attribute plus whatever datasets the filter writes (a surface
//! filter writes `bins`, the user surface identifiers).
//!
//! ```text
//! statepoint.nc
//! ├── :filetype = "statepoint"
//! ├── :version  = "<crate version>"
//! ├── filter_1/
//! │   ├── :type   = "surface"
//! │   ├── :n_bins = 3
//! │   └── bins(bins) int
//! └── filter_2/ ...
//! ```

mod error;
mod reader;
mod record;
mod writer;

pub use error::StatepointError;
pub use reader::{FilterRecord, read_filter_record};
pub use record::NetcdfRecord;
pub use writer::{StatepointConfig, filter_group_name, write_statepoint};
