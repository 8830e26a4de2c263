use crate::Card;
use crate::Slot;
use crate::TRIPLE;

/// One player's marks, in placement order, each paired with the card
/// that was on the slot when it was marked.
///
/// A full set is pending evaluation until the referee answers or a card
/// under one of the marks is removed.
#[derive(Debug, Default)]
pub struct Markers {
    marks: Vec<(Slot, Card)>,
    pending: bool,
}

impl Markers {
    pub fn len(&self) -> usize {
        self.marks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.marks.len() == TRIPLE
    }
    pub fn is_pending(&self) -> bool {
        self.pending
    }
    pub fn contains(&self, slot: Slot) -> bool {
        self.marks.iter().any(|(s, _)| *s == slot)
    }
    pub fn slots(&self) -> Vec<Slot> {
        self.marks.iter().map(|(s, _)| *s).collect()
    }
    pub fn mark(&mut self, slot: Slot, card: Card) {
        assert!(self.marks.len() < TRIPLE, "marker bound exceeded");
        assert!(!self.contains(slot), "slot {} marked twice", slot);
        self.marks.push((slot, card));
    }
    /// Removes the mark on `slot`. Dropping below a full set releases a
    /// pending player.
    pub fn unmark(&mut self, slot: Slot) -> bool {
        let before = self.marks.len();
        self.marks.retain(|(s, _)| *s != slot);
        if self.marks.len() < TRIPLE {
            self.pending = false;
        }
        self.marks.len() < before
    }
    /// Flags the full set as submitted and returns its snapshot.
    pub fn submit(&mut self) -> ([Slot; TRIPLE], [Card; TRIPLE]) {
        assert!(self.is_full(), "claim from {} marks", self.marks.len());
        self.pending = true;
        (
            std::array::from_fn(|i| self.marks[i].0),
            std::array::from_fn(|i| self.marks[i].1),
        )
    }
    pub fn release(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn fills_to_three() {
        let mut markers = Markers::default();
        markers.mark(4, 40);
        markers.mark(1, 10);
        assert!(!markers.is_full());
        markers.mark(7, 70);
        assert!(markers.is_full());
        assert_eq!(markers.slots(), vec![4, 1, 7]);
    }
    #[test]
    #[should_panic]
    fn fourth_mark_panics() {
        let mut markers = Markers::default();
        (0..4).for_each(|s| markers.mark(s, s));
    }
    #[test]
    fn submit_snapshots_in_order() {
        let mut markers = Markers::default();
        markers.mark(2, 20);
        markers.mark(0, 0);
        markers.mark(5, 50);
        assert_eq!(markers.submit(), ([2, 0, 5], [20, 0, 50]));
        assert!(markers.is_pending());
    }
    #[test]
    fn unmark_releases_pending() {
        let mut markers = Markers::default();
        (0..3).for_each(|s| markers.mark(s, s));
        markers.submit();
        assert!(markers.unmark(1));
        assert!(!markers.is_pending());
        assert!(!markers.unmark(1));
        assert_eq!(markers.len(), 2);
    }
    #[test]
    fn release_keeps_marks() {
        let mut markers = Markers::default();
        (0..3).for_each(|s| markers.mark(s, s));
        markers.submit();
        markers.release();
        assert!(!markers.is_pending());
        assert!(markers.is_full());
    }
}
