use std::{cmp::Ordering, ops::Add};

/// Weight stored for an edge. Zero in the matrix means "no edge".
pub type Weight = u32;

/// Length of a path. Wide enough that a sum of `N` maximal weights does not
/// wrap for any vertex count that fits in memory.
pub type Distance = u64;

/// Tentative distance during the search, with an explicit infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tentative {
    Finite(Distance),
    #[default]
    Infinite,
}

impl Tentative {
    pub fn is_finite(&self) -> bool {
        matches!(self, Tentative::Finite(_))
    }

    pub fn finite(self) -> Option<Distance> {
        match self {
            Tentative::Finite(dist) => Some(dist),
            Tentative::Infinite => None,
        }
    }
}

impl From<Distance> for Tentative {
    fn from(dist: Distance) -> Self {
        Tentative::Finite(dist)
    }
}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tentative {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Tentative::Finite(lhs), Tentative::Finite(rhs)) => lhs.cmp(rhs),
            (Tentative::Finite(_), Tentative::Infinite) => Ordering::Less,
            (Tentative::Infinite, Tentative::Finite(_)) => Ordering::Greater,
            (Tentative::Infinite, Tentative::Infinite) => Ordering::Equal,
        }
    }
}

impl Add<Weight> for Tentative {
    type Output = Tentative;

    fn add(self, rhs: Weight) -> Self::Output {
        match self {
            Tentative::Finite(dist) => dist
                .checked_add(Distance::from(rhs))
                .map_or(Tentative::Infinite, Tentative::Finite),
            Tentative::Infinite => Tentative::Infinite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinity_is_greatest() {
        assert!(Tentative::Finite(Distance::MAX) < Tentative::Infinite);
        assert!(Tentative::Finite(0) < Tentative::Finite(1));
        assert_eq!(Tentative::Infinite.cmp(&Tentative::Infinite), Ordering::Equal);
    }

    #[test]
    fn add_saturates_to_infinity() {
        assert_eq!(Tentative::Finite(3) + 4, Tentative::Finite(7));
        assert_eq!(Tentative::Infinite + 4, Tentative::Infinite);
        assert_eq!(Tentative::Finite(Distance::MAX) + 1, Tentative::Infinite);
    }
}
