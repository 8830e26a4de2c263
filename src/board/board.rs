use super::*;
use crate::Card;
use crate::Position;
use crate::Slot;
use crate::claims::*;
use crate::display::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;

/// Face-up cards, player marks, and the claim queue.
///
/// Lock order: slot locks ascending, then the card index or one player's
/// markers. A claim is queued before the slot lock of its third mark is
/// released, so every queued snapshot described real cards when it was
/// taken.
pub struct Board {
    cells: Vec<tokio::sync::Mutex<Cell>>,
    index: Mutex<Vec<Option<Slot>>>,
    markers: Vec<Mutex<Markers>>,
    claims: Queue,
    screen: Arc<dyn Screen>,
    delay: Duration,
}

impl Board {
    pub fn new(
        slots: usize,
        deck: usize,
        players: usize,
        delay: Duration,
        screen: Arc<dyn Screen>,
    ) -> Self {
        Self {
            cells: (0..slots).map(|_| Default::default()).collect(),
            index: Mutex::new(vec![None; deck]),
            markers: (0..players).map(|_| Default::default()).collect(),
            claims: Queue::default(),
            screen,
            delay,
        }
    }
    pub fn size(&self) -> usize {
        self.cells.len()
    }
    pub fn players(&self) -> usize {
        self.markers.len()
    }
    pub fn claims(&self) -> &Queue {
        &self.claims
    }
    pub fn slot_of(&self, card: Card) -> Option<Slot> {
        self.index().get(card).copied().flatten()
    }
}

// single-slot card operations
impl Board {
    pub async fn place_card(&self, card: Card, slot: Slot) {
        let mut cell = self.cells[slot].lock().await;
        self.put(&mut cell, card, slot).await;
    }
    pub async fn remove_card(&self, slot: Slot) -> Card {
        let mut cell = self.cells[slot].lock().await;
        self.clear(&mut cell, slot).await
    }
}

// marker operations
impl Board {
    /// Marks `slot` for `player` if it holds a card. The third mark queues
    /// a claim while this slot is still locked.
    pub async fn place_marker(&self, player: Position, slot: Slot) -> Mark {
        let Some(cell) = self.cells.get(slot) else {
            return Mark::Rejected;
        };
        let mut cell = cell.lock().await;
        let Some(card) = cell.card() else {
            log::trace!("[board] P{} marks empty slot {}", player, slot);
            return Mark::Rejected;
        };
        let submitted = {
            let mut marks = self.marks(player);
            if marks.is_pending() || marks.is_full() || marks.contains(slot) {
                return Mark::Rejected;
            }
            marks.mark(slot, card);
            cell.mark(player);
            marks.is_full().then(|| marks.submit())
        };
        self.screen.notify(Event::PlaceMarker { player, slot });
        match submitted {
            None => Mark::Placed,
            Some((slots, cards)) => {
                let (claim, verdict) = Claim::new(player, slots, cards);
                self.claims.push(claim);
                drop(cell);
                Mark::Claimed(verdict)
            }
        }
    }
    pub async fn remove_marker(&self, player: Position, slot: Slot) -> Mark {
        let Some(cell) = self.cells.get(slot) else {
            return Mark::Rejected;
        };
        let mut cell = cell.lock().await;
        {
            let mut marks = self.marks(player);
            if marks.is_pending() || !marks.contains(slot) {
                return Mark::Rejected;
            }
            marks.unmark(slot);
            cell.unmark(player);
        }
        self.screen.notify(Event::RemoveMarker { player, slot });
        Mark::Removed
    }
    pub fn is_marked(&self, player: Position, slot: Slot) -> bool {
        self.marks(player).contains(slot)
    }
    pub fn is_pending(&self, player: Position) -> bool {
        self.marks(player).is_pending()
    }
    pub fn markers(&self, player: Position) -> Vec<Slot> {
        self.marks(player).slots()
    }
    /// Lets a player with a rejected claim act again; its marks stay.
    pub fn release(&self, player: Position) {
        self.marks(player).release();
    }
}

// multi-slot access
impl Board {
    /// Locks the given slots in ascending order.
    pub async fn hold<I>(&self, slots: I) -> Hold<'_>
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut slots = slots.into_iter().collect::<Vec<_>>();
        slots.sort_unstable();
        slots.dedup();
        let mut cells = Vec::with_capacity(slots.len());
        for slot in slots {
            cells.push((slot, self.cells[slot].lock().await));
        }
        Hold::new(self, cells)
    }
    pub async fn hold_all(&self) -> Hold<'_> {
        self.hold(0..self.size()).await
    }
    /// Consistent view of the whole board.
    pub async fn snapshot(&self) -> Snapshot {
        let hold = self.hold_all().await;
        Snapshot {
            slots: (0..self.size()).map(|s| hold.card(s)).collect(),
            cards: self.index().clone(),
            markers: (0..self.players()).map(|p| self.markers(p)).collect(),
            pending: (0..self.players()).map(|p| self.is_pending(p)).collect(),
        }
    }
}

// primitives shared with Hold; callers own the cell's lock
impl Board {
    pub(super) async fn put(&self, cell: &mut Cell, card: Card, slot: Slot) {
        self.pause().await;
        {
            let mut index = self.index();
            assert!(
                index[card].is_none(),
                "card {} already at slot {:?}",
                card,
                index[card]
            );
            cell.put(card);
            index[card] = Some(slot);
        }
        log::trace!("[board] card {} -> slot {}", card, slot);
        self.screen.notify(Event::PlaceCard { card, slot });
    }
    pub(super) async fn clear(&self, cell: &mut Cell, slot: Slot) -> Card {
        self.pause().await;
        let card = cell
            .take()
            .unwrap_or_else(|| panic!("remove from empty slot {}", slot));
        {
            let mut index = self.index();
            assert_eq!(
                index[card],
                Some(slot),
                "card {} desynced from slot {}",
                card,
                slot
            );
            index[card] = None;
        }
        log::trace!("[board] card {} <- slot {}", card, slot);
        self.screen.notify(Event::RemoveCard { slot });
        self.lift(cell, slot);
        card
    }
    /// Lifts every mark on the cell; full sets drop below three and stop
    /// being pending.
    pub(super) fn lift(&self, cell: &mut Cell, slot: Slot) {
        for player in cell.drain() {
            self.marks(player).unmark(slot);
            self.screen.notify(Event::RemoveMarker { player, slot });
        }
    }
}

impl Board {
    fn index(&self) -> MutexGuard<'_, Vec<Option<Slot>>> {
        self.index.lock().expect("card index poisoned")
    }
    fn marks(&self, player: Position) -> MutexGuard<'_, Markers> {
        self.markers[player].lock().expect("markers poisoned")
    }
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
