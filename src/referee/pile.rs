use crate::Card;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Undealt cards. Drawn from the front, returned to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile(VecDeque<Card>);

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}

impl Pile {
    /// Cards `0..deck` in order.
    pub fn new(deck: usize) -> Self {
        Self((0..deck).collect())
    }
    pub fn shuffle(&mut self) {
        self.0.make_contiguous().shuffle(&mut rand::rng());
    }
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop_front()
    }
    pub fn give_back(&mut self, card: Card) {
        self.0.push_back(card);
    }
    pub fn cards(&self) -> Vec<Card> {
        self.0.iter().copied().collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn draws_in_order() {
        let mut pile = Pile::new(3);
        assert_eq!(pile.draw(), Some(0));
        assert_eq!(pile.draw(), Some(1));
        pile.give_back(0);
        assert_eq!(pile.cards(), vec![2, 0]);
    }
    #[test]
    fn shuffle_preserves_cards() {
        let mut pile = Pile::new(81);
        pile.shuffle();
        let mut cards = pile.cards();
        cards.sort_unstable();
        assert_eq!(cards, (0..81).collect::<Vec<_>>());
    }
    #[test]
    fn empty_pile_draws_nothing() {
        let mut pile = Pile::from(vec![]);
        assert!(pile.is_empty());
        assert_eq!(pile.draw(), None);
    }
}
