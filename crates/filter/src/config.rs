//! Configuration for surface filters.

/// Surface identifiers for one filter, exactly as the user listed them.
///
/// Nothing is validated here. Identifiers are checked against the surface
/// directory by [`SurfaceFilter::initialize`](crate::SurfaceFilter::initialize).
///
/// # Example
///
/// ```
/// use surftally_filter::SurfaceFilterConfig;
///
/// let config = SurfaceFilterConfig::new(vec![4, 8, 4]);
/// assert_eq!(config.n_bins(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceFilterConfig {
    bins: Vec<i32>,
}

impl SurfaceFilterConfig {
    /// Creates a configuration from surface identifiers in bin order.
    pub fn new(bins: Vec<i32>) -> Self {
        Self { bins }
    }

    /// Returns the configured surface identifiers.
    pub fn bins(&self) -> &[i32] {
        &self.bins
    }

    /// Returns the number of bins.
    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub(crate) fn into_bins(self) -> Vec<i32> {
        self.bins
    }
}

impl From<Vec<i32>> for SurfaceFilterConfig {
    fn from(bins: Vec<i32>) -> Self {
        Self::new(bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_ids_verbatim() {
        let cfg = SurfaceFilterConfig::new(vec![9, -1, 0, 9]);
        assert_eq!(cfg.bins(), &[9, -1, 0, 9]);
        assert_eq!(cfg.n_bins(), 4);
    }

    #[test]
    fn default_is_empty() {
        let cfg = SurfaceFilterConfig::default();
        assert_eq!(cfg.n_bins(), 0);
    }

    #[test]
    fn from_vec() {
        let cfg: SurfaceFilterConfig = vec![1, 2].into();
        assert_eq!(cfg, SurfaceFilterConfig::new(vec![1, 2]));
    }
}
