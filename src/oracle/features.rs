use super::*;
use crate::Card;
use crate::Config;

/// The classic rule: a card is a vector of `count` features, each taking one
/// of `size` values, read off the card id as base-`size` digits.
/// A triple is legal iff every feature is either all-same or all-different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    count: usize,
    size: usize,
}

impl Default for Features {
    fn default() -> Self {
        Self { count: 4, size: 3 }
    }
}

impl From<&Config> for Features {
    fn from(config: &Config) -> Self {
        Self::new(config.feature_count, config.feature_size)
    }
}

impl Features {
    pub fn new(count: usize, size: usize) -> Self {
        assert!(size >= 2, "features need at least two values");
        assert!(
            u32::try_from(count)
                .ok()
                .and_then(|count| size.checked_pow(count))
                .is_some(),
            "{} features of {} values overflow the card space",
            count,
            size
        );
        Self { count, size }
    }
    /// Number of distinct cards this geometry can describe.
    pub fn deck(&self) -> usize {
        self.size.pow(self.count as u32)
    }
    /// Value of feature `f` on `card`.
    pub fn feature(&self, card: Card, f: usize) -> usize {
        card / self.size.pow(f as u32) % self.size
    }
}

impl Oracle for Features {
    fn is_set(&self, triple: &Triple) -> bool {
        let [a, b, c] = *triple;
        if a == b || b == c || a == c {
            return false;
        }
        (0..self.count)
            .map(|f| triple.map(|card| self.feature(card, f)))
            .all(|[x, y, z]| (x == y && y == z) || (x != y && y != z && x != z))
    }

    fn features(&self, card: Card) -> Vec<usize> {
        (0..self.count).map(|f| self.feature(card, f)).collect()
    }
}
