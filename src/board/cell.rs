use crate::Card;
use crate::Position;
use std::collections::BTreeSet;

/// Contents of one slot: an optional card and the players marking it.
#[derive(Debug, Default)]
pub struct Cell {
    card: Option<Card>,
    players: BTreeSet<Position>,
}

impl Cell {
    pub fn card(&self) -> Option<Card> {
        self.card
    }
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }
    pub fn put(&mut self, card: Card) {
        assert!(self.card.is_none(), "card {} dealt onto an occupied slot", card);
        self.card = Some(card);
    }
    pub fn take(&mut self) -> Option<Card> {
        self.card.take()
    }
    pub fn is_marked(&self, player: Position) -> bool {
        self.players.contains(&player)
    }
    pub fn mark(&mut self, player: Position) -> bool {
        self.players.insert(player)
    }
    pub fn unmark(&mut self, player: Position) -> bool {
        self.players.remove(&player)
    }
    /// Lifts every mark, returning who held one.
    pub fn drain(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.players).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn put_and_take() {
        let mut cell = Cell::default();
        assert!(cell.is_empty());
        cell.put(7);
        assert_eq!(cell.card(), Some(7));
        assert_eq!(cell.take(), Some(7));
        assert!(cell.is_empty());
    }
    #[test]
    #[should_panic]
    fn put_on_occupied() {
        let mut cell = Cell::default();
        cell.put(1);
        cell.put(2);
    }
    #[test]
    fn marks_are_per_player() {
        let mut cell = Cell::default();
        assert!(cell.mark(0));
        assert!(!cell.mark(0));
        assert!(cell.mark(2));
        assert!(cell.is_marked(2));
        assert_eq!(cell.drain(), vec![0, 2]);
        assert!(!cell.is_marked(0));
    }
}
