use super::*;
use crate::Card;
use crate::Slot;
use tokio::sync::MutexGuard;

/// A set of slot locks acquired in ascending order.
///
/// Used for every operation that spans more than one slot: dealing,
/// resets, and replacing an accepted triple. Dropping the hold releases
/// all of them.
pub struct Hold<'b> {
    board: &'b Board,
    cells: Vec<(Slot, MutexGuard<'b, Cell>)>,
}

impl<'b> Hold<'b> {
    pub(super) fn new(board: &'b Board, cells: Vec<(Slot, MutexGuard<'b, Cell>)>) -> Self {
        debug_assert!(cells.windows(2).all(|w| w[0].0 < w[1].0));
        Self { board, cells }
    }
    pub fn slots(&self) -> Vec<Slot> {
        self.cells.iter().map(|(s, _)| *s).collect()
    }
    pub fn card(&self, slot: Slot) -> Option<Card> {
        self.cell(slot).card()
    }
    /// Held slots with a card, ascending.
    pub fn occupied(&self) -> Vec<Slot> {
        self.cells
            .iter()
            .filter(|(_, c)| !c.is_empty())
            .map(|(s, _)| *s)
            .collect()
    }
    /// Held slots without a card, ascending.
    pub fn vacant(&self) -> Vec<Slot> {
        self.cells
            .iter()
            .filter(|(_, c)| c.is_empty())
            .map(|(s, _)| *s)
            .collect()
    }
    pub fn cards(&self) -> Vec<(Slot, Card)> {
        self.cells
            .iter()
            .filter_map(|(s, c)| c.card().map(|card| (*s, card)))
            .collect()
    }
    pub async fn place(&mut self, card: Card, slot: Slot) {
        let board = self.board;
        board.put(self.cell_mut(slot), card, slot).await;
    }
    pub async fn remove(&mut self, slot: Slot) -> Card {
        let board = self.board;
        board.clear(self.cell_mut(slot), slot).await
    }
    /// Lifts every player's marks on the held slots.
    pub fn clear_markers(&mut self) {
        let board = self.board;
        for (slot, cell) in self.cells.iter_mut() {
            board.lift(cell, *slot);
        }
    }
}

impl Hold<'_> {
    fn cell(&self, slot: Slot) -> &Cell {
        self.cells
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, c)| &**c)
            .unwrap_or_else(|| panic!("slot {} not held", slot))
    }
    fn cell_mut(&mut self, slot: Slot) -> &mut Cell {
        self.cells
            .iter_mut()
            .find(|(s, _)| *s == slot)
            .map(|(_, c)| &mut **c)
            .unwrap_or_else(|| panic!("slot {} not held", slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Recorder;
    use std::sync::Arc;
    use std::time::Duration;
    fn board() -> Board {
        Board::new(5, 20, 2, Duration::ZERO, Arc::new(Recorder::default()))
    }
    #[tokio::test]
    async fn holds_sorted_and_deduplicated() {
        let board = board();
        let hold = board.hold([4, 1, 4, 2]).await;
        assert_eq!(hold.slots(), vec![1, 2, 4]);
    }
    #[tokio::test]
    async fn vacant_and_occupied() {
        let board = board();
        let mut hold = board.hold_all().await;
        hold.place(9, 3).await;
        hold.place(2, 0).await;
        assert_eq!(hold.occupied(), vec![0, 3]);
        assert_eq!(hold.vacant(), vec![1, 2, 4]);
        assert_eq!(hold.cards(), vec![(0, 2), (3, 9)]);
    }
    #[tokio::test]
    async fn clear_markers_releases_everyone() {
        let board = board();
        for slot in 0..3 {
            board.place_card(slot, slot).await;
            board.place_marker(0, slot).await;
        }
        board.place_marker(1, 4).await;
        board.place_card(4, 4).await;
        board.place_marker(1, 4).await;
        assert!(board.is_pending(0));
        {
            let mut hold = board.hold_all().await;
            hold.clear_markers();
        }
        assert!(!board.is_pending(0));
        assert!(board.markers(0).is_empty());
        assert!(board.markers(1).is_empty());
        assert_eq!(board.snapshot().await.on_board(), vec![0, 1, 2, 4]);
    }
    #[tokio::test]
    #[should_panic]
    async fn unheld_slot_panics() {
        let board = board();
        let hold = board.hold([0, 1]).await;
        hold.card(2);
    }
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_holds_do_not_deadlock() {
        let board = Arc::new(board());
        let tasks = (0..8)
            .map(|i| {
                let board = board.clone();
                tokio::spawn(async move {
                    for j in 0..100 {
                        let a = (i + j) % 5;
                        let b = (i * 3 + j * 2) % 5;
                        let _hold = board.hold([b, a]).await;
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect::<Vec<_>>();
        tokio::time::timeout(Duration::from_secs(5), futures::future::join_all(tasks))
            .await
            .expect("no deadlock");
    }
}
