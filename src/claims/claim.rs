use super::*;
use crate::Card;
use crate::Position;
use crate::Slot;
use crate::TRIPLE;
use tokio::sync::oneshot;

/// Snapshot of a player's three marks, taken while the third slot was
/// still locked. Consumed exactly once: [`Claim::answer`] takes `self`.
#[derive(Debug)]
pub struct Claim {
    player: Position,
    slots: [Slot; TRIPLE],
    cards: [Card; TRIPLE],
    reply: oneshot::Sender<Verdict>,
}

impl Claim {
    /// Builds a claim and the receiving end its player will wait on.
    pub fn new(
        player: Position,
        slots: [Slot; TRIPLE],
        cards: [Card; TRIPLE],
    ) -> (Self, oneshot::Receiver<Verdict>) {
        assert!(
            slots[0] != slots[1] && slots[1] != slots[2] && slots[0] != slots[2],
            "claim over repeated slots {:?}",
            slots
        );
        let (reply, rx) = oneshot::channel();
        (
            Self {
                player,
                slots,
                cards,
                reply,
            },
            rx,
        )
    }
    pub fn player(&self) -> Position {
        self.player
    }
    pub fn slots(&self) -> [Slot; TRIPLE] {
        self.slots
    }
    pub fn cards(&self) -> [Card; TRIPLE] {
        self.cards
    }
    /// True iff every slot still holds the card captured in the snapshot.
    pub fn is_live<F>(&self, card_at: F) -> bool
    where
        F: Fn(Slot) -> Option<Card>,
    {
        self.slots
            .iter()
            .zip(self.cards.iter())
            .all(|(slot, card)| card_at(*slot) == Some(*card))
    }
    /// Delivers the verdict. A claimant that already left is not an error.
    pub fn answer(self, verdict: Verdict) {
        log::debug!("[claims] P{} {:?} -> {}", self.player, self.slots, verdict);
        if self.reply.send(verdict).is_err() {
            log::debug!("[claims] P{} left before its verdict", self.player);
        }
    }
}
