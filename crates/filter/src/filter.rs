//! The interface every tally filter kind exposes to the tally framework.

use crate::checkpoint::CheckpointRecord;
use crate::crossing::SurfaceCrossing;
use crate::error::FilterError;
use crate::filter_match::FilterMatch;

/// Particle state a filter may inspect while scoring.
pub trait ParticleView {
    /// Returns the particle's current surface-crossing indicator.
    fn surface_crossing(&self) -> SurfaceCrossing;
}

/// A tally filter: maps a scoring event onto weighted bins.
///
/// Filters are fully built before transport starts and only read afterwards,
/// so every method takes `&self` and implementations must be `Send + Sync`.
pub trait Filter: Send + Sync {
    /// Short type name written to checkpoints, e.g. `"surface"`.
    fn filter_type(&self) -> &'static str;

    /// Number of bins.
    fn n_bins(&self) -> usize;

    /// Appends the bins and weights `particle` contributes to.
    fn get_all_bins(&self, particle: &dyn ParticleView, matched: &mut FilterMatch);

    /// Writes this filter's checkpoint record.
    ///
    /// Implementations call [`write_filter_header`] first.
    fn to_statepoint(&self, record: &mut dyn CheckpointRecord) -> Result<(), FilterError>;

    /// Returns a display label for the 1-based `bin`.
    fn text_label(&self, bin: usize) -> String;
}

/// Writes the fields shared by all filter kinds: `type` and `n_bins`.
///
/// # Errors
///
/// Returns [`FilterError::TooManyBins`] if the bin count exceeds `i32::MAX`,
/// or whatever the record backend reports.
pub fn write_filter_header(
    record: &mut dyn CheckpointRecord,
    filter: &dyn Filter,
) -> Result<(), FilterError> {
    let n_bins = filter.n_bins();
    let n = i32::try_from(n_bins).map_err(|_| FilterError::TooManyBins { n_bins })?;
    record.write_str_attribute("type", filter.filter_type())?;
    record.write_int_attribute("n_bins", n)?;
    Ok(())
}
