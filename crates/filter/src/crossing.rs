//! Signed surface-crossing indicators.
//!
//! The transport engine records the last crossed surface on each particle as
//! a single signed integer: the magnitude is the dense surface index plus one
//! and the sign is the side the particle moved into. Zero means the particle
//! is not on a surface.

use crate::filter::ParticleView;

/// Side of a surface a particle crossed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Into the positive half-space.
    Positive,
    /// Into the negative half-space.
    Negative,
}

impl Direction {
    /// Returns the tally weight for this direction: `+1.0` or `-1.0`.
    pub fn weight(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A decoded view of a particle's signed crossing indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurfaceCrossing(i32);

impl SurfaceCrossing {
    /// The particle is not on any surface.
    pub const NONE: Self = Self(0);

    /// Wraps a raw indicator as carried by the particle.
    pub fn from_raw(indicator: i32) -> Self {
        Self(indicator)
    }

    /// Encodes a crossing of the surface at dense `index`.
    ///
    /// Returns `None` if `index + 1` does not fit the indicator.
    pub fn new(index: usize, direction: Direction) -> Option<Self> {
        let magnitude = i32::try_from(index.checked_add(1)?).ok()?;
        Some(match direction {
            Direction::Positive => Self(magnitude),
            Direction::Negative => Self(-magnitude),
        })
    }

    /// Returns the raw signed indicator.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the dense index of the crossed surface, or `None` for
    /// [`NONE`](Self::NONE).
    pub fn index(self) -> Option<usize> {
        (self.0.unsigned_abs() as usize).checked_sub(1)
    }

    /// Returns the crossing direction, or `None` for [`NONE`](Self::NONE).
    pub fn direction(self) -> Option<Direction> {
        match self.0 {
            0 => None,
            i if i < 0 => Some(Direction::Negative),
            _ => Some(Direction::Positive),
        }
    }
}

impl From<i32> for SurfaceCrossing {
    fn from(indicator: i32) -> Self {
        Self::from_raw(indicator)
    }
}

impl ParticleView for SurfaceCrossing {
    fn surface_crossing(&self) -> SurfaceCrossing {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_positive() {
        let c = SurfaceCrossing::from_raw(4);
        assert_eq!(c.index(), Some(3));
        assert_eq!(c.direction(), Some(Direction::Positive));
    }

    #[test]
    fn decode_negative() {
        let c = SurfaceCrossing::from_raw(-4);
        assert_eq!(c.index(), Some(3));
        assert_eq!(c.direction(), Some(Direction::Negative));
    }

    #[test]
    fn zero_is_not_a_crossing() {
        assert_eq!(SurfaceCrossing::NONE.index(), None);
        assert_eq!(SurfaceCrossing::NONE.direction(), None);
        assert_eq!(SurfaceCrossing::default(), SurfaceCrossing::NONE);
    }

    #[test]
    fn min_value_does_not_overflow() {
        let c = SurfaceCrossing::from_raw(i32::MIN);
        assert_eq!(c.index(), Some(i32::MAX as usize));
        assert_eq!(c.direction(), Some(Direction::Negative));
    }

    #[test]
    fn encode_matches_decode() {
        let c = SurfaceCrossing::new(0, Direction::Negative).unwrap();
        assert_eq!(c.raw(), -1);
        let c = SurfaceCrossing::new(6, Direction::Positive).unwrap();
        assert_eq!(c.raw(), 7);
        assert_eq!(c.index(), Some(6));
    }

    #[test]
    fn encode_out_of_range() {
        assert!(SurfaceCrossing::new(i32::MAX as usize, Direction::Positive).is_none());
        assert!(SurfaceCrossing::new(usize::MAX, Direction::Negative).is_none());
    }

    #[test]
    fn direction_weights() {
        assert_eq!(Direction::Positive.weight(), 1.0);
        assert_eq!(Direction::Negative.weight(), -1.0);
    }
}
