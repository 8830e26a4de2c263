use crate::Card;
use crate::TRIPLE;

/// Three cards submitted together.
pub type Triple = [Card; TRIPLE];

/// Pure matching rule over card triples.
///
/// Implementations hold no mutable state and may be shared freely
/// between the referee and any number of readers.
pub trait Oracle: Send + Sync {
    /// True iff the three cards form a legal triple.
    fn is_set(&self, triple: &Triple) -> bool;

    /// Feature values of a single card, for hints and display.
    fn features(&self, card: Card) -> Vec<usize>;

    /// Up to `max` legal triples among `cards`, in lexicographic index order.
    fn find_sets(&self, cards: &[Card], max: usize) -> Vec<Triple> {
        let n = cards.len();
        let mut sets = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    if sets.len() >= max {
                        return sets;
                    }
                    let triple = [cards[i], cards[j], cards[k]];
                    if self.is_set(&triple) {
                        sets.push(triple);
                    }
                }
            }
        }
        sets
    }

    fn has_set(&self, cards: &[Card]) -> bool {
        !self.find_sets(cards, 1).is_empty()
    }
}
