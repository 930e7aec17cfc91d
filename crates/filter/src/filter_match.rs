//! Per-event bin/weight accumulator.

/// Bins and weights one scoring event contributes to.
///
/// Bins are 1-based. The two sequences are always the same length; a fresh
/// match (or one that was [`clear`](Self::clear)ed) is used per event and
/// belongs to a single caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMatch {
    bins: Vec<usize>,
    weights: Vec<f64>,
}

impl FilterMatch {
    /// Creates an empty match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one contribution.
    pub fn push(&mut self, bin: usize, weight: f64) {
        self.bins.push(bin);
        self.weights.push(weight);
    }

    /// Returns the matched 1-based bins.
    pub fn bins(&self) -> &[usize] {
        &self.bins
    }

    /// Returns the weights, parallel to [`bins`](Self::bins).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates over `(bin, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.bins.iter().copied().zip(self.weights.iter().copied())
    }

    /// Returns the number of contributions.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Removes all contributions, keeping the allocations.
    pub fn clear(&mut self) {
        self.bins.clear();
        self.weights.clear();
    }
}
