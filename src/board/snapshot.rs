use crate::Card;
use crate::Slot;
use crate::TRIPLE;

/// Board state read under every slot lock at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Card on each slot.
    pub slots: Vec<Option<Card>>,
    /// Slot of each card.
    pub cards: Vec<Option<Slot>>,
    /// Each player's marked slots, in placement order.
    pub markers: Vec<Vec<Slot>>,
    /// Whether each player has a claim awaiting a verdict.
    pub pending: Vec<bool>,
}

impl Snapshot {
    /// `slots[s] == c` iff `cards[c] == s`.
    pub fn is_bijective(&self) -> bool {
        self.slots.iter().enumerate().all(|(s, card)| {
            card.map_or(true, |c| self.cards.get(c) == Some(&Some(s)))
        }) && self.cards.iter().enumerate().all(|(c, slot)| {
            slot.map_or(true, |s| self.slots.get(s) == Some(&Some(c)))
        })
    }
    pub fn is_bounded(&self) -> bool {
        self.markers.iter().all(|m| m.len() <= TRIPLE)
    }
    /// Cards on the board, by ascending slot.
    pub fn on_board(&self) -> Vec<Card> {
        self.slots.iter().filter_map(|c| *c).collect()
    }
    pub fn vacant(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(s, _)| s)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn snapshot(slots: Vec<Option<Card>>, cards: Vec<Option<Slot>>) -> Snapshot {
        Snapshot {
            slots,
            cards,
            markers: vec![],
            pending: vec![],
        }
    }
    #[test]
    fn consistent_mapping() {
        let s = snapshot(vec![Some(2), None], vec![None, None, Some(0)]);
        assert!(s.is_bijective());
        assert_eq!(s.on_board(), vec![2]);
        assert_eq!(s.vacant(), vec![1]);
    }
    #[test]
    fn dangling_card_index() {
        let s = snapshot(vec![None, None], vec![Some(1)]);
        assert!(!s.is_bijective());
    }
    #[test]
    fn mismatched_slot() {
        let s = snapshot(vec![Some(0), Some(1)], vec![Some(1), Some(0)]);
        assert!(!s.is_bijective());
    }
}
