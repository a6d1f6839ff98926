//! Declarative movement descriptors.
//!
//! A `MovementRule` is a list of direction vectors plus a range limit. Sliding
//! pieces use `RangeLimit::Unbounded`, stepping pieces use `RangeLimit::Steps(1)`.
//! The limit counts steps along one direction, so a knight's L offset is a
//! single step of a non-extensible vector.

use crate::board::board_point::Vector;

/// How many steps a piece may take along one direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeLimit {
    Unbounded,
    /// `Steps(0)` means the piece cannot move at all.
    Steps(u32),
}

impl RangeLimit {
    /// True while another step is permitted after `steps_taken` steps.
    #[inline]
    pub const fn allows(self, steps_taken: u32) -> bool {
        match self {
            RangeLimit::Unbounded => true,
            RangeLimit::Steps(limit) => steps_taken < limit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementRule {
    directions: Vec<Vector>,
    range_limit: RangeLimit,
}

impl MovementRule {
    pub fn new(directions: impl Into<Vec<Vector>>, range_limit: RangeLimit) -> Self {
        Self {
            directions: directions.into(),
            range_limit,
        }
    }

    /// Directions in the order rays are walked.
    #[inline]
    pub fn directions(&self) -> &[Vector] {
        &self.directions
    }

    #[inline]
    pub fn range_limit(&self) -> RangeLimit {
        self.range_limit
    }

    /// A rule with no directions or a zero range yields no moves.
    pub fn is_immobile(&self) -> bool {
        self.directions.is_empty() || self.range_limit == RangeLimit::Steps(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_limit_counts_steps() {
        assert!(RangeLimit::Steps(1).allows(0));
        assert!(!RangeLimit::Steps(1).allows(1));
        assert!(!RangeLimit::Steps(0).allows(0));
        assert!(RangeLimit::Unbounded.allows(u32::MAX));
    }

    #[test]
    fn immobile_rules() {
        assert!(MovementRule::new(Vec::new(), RangeLimit::Unbounded).is_immobile());
        assert!(MovementRule::new([Vector::new(1, 0)], RangeLimit::Steps(0)).is_immobile());
        assert!(!MovementRule::new([Vector::new(1, 0)], RangeLimit::Steps(2)).is_immobile());
    }
}
