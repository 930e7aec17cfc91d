//! Error types for the surftally-filter crate.

/// Error type for all fallible operations in the surftally-filter crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Returned when a configured surface identifier is not in the directory.
    ///
    /// This is a defect in the model description. Callers are expected to
    /// abort the run rather than continue with a partial filter.
    #[error("could not find surface {id} specified on tally filter")]
    SurfaceNotFound {
        /// The unresolved identifier.
        id: i32,
    },

    /// Returned when the bin count does not fit a checkpoint integer.
    #[error("filter has {n_bins} bins, more than a checkpoint record can hold")]
    TooManyBins {
        /// Number of bins on the filter.
        n_bins: usize,
    },

    /// Wraps a failure reported by a checkpoint backend.
    #[error("checkpoint error: {reason}")]
    Checkpoint {
        /// Description of the backend failure.
        reason: String,
    },
}
