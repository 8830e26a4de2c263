use crate::Card;
use crate::Position;
use crate::Score;
use crate::Slot;
use crate::TRIPLE;

/// Notifications emitted by the board, referee, and player agents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A card was dealt face up.
    PlaceCard { card: Card, slot: Slot },
    /// A card left the board.
    RemoveCard { slot: Slot },
    /// A player marked a slot.
    PlaceMarker { player: Position, slot: Slot },
    /// A player's mark on a slot was lifted.
    RemoveMarker { player: Position, slot: Slot },
    /// A player's score changed.
    Score { player: Position, score: Score },
    /// Time left on a player's freeze; zero when it ends.
    Freeze { player: Position, millis: u64 },
    /// Time left in the turn, and whether it is inside the warning window.
    Countdown { millis: u64, warn: bool },
    /// A legal triple currently on the board.
    Hint {
        slots: [Slot; TRIPLE],
        features: Vec<Vec<usize>>,
    },
    /// Highest-scoring players at game end.
    Winners(Vec<Position>),
}

impl Event {
    pub fn player(&self) -> Option<Position> {
        match self {
            Event::PlaceMarker { player, .. }
            | Event::RemoveMarker { player, .. }
            | Event::Score { player, .. }
            | Event::Freeze { player, .. } => Some(*player),
            _ => None,
        }
    }
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Event::PlaceCard { slot, .. }
            | Event::RemoveCard { slot }
            | Event::PlaceMarker { slot, .. }
            | Event::RemoveMarker { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::PlaceCard { card, slot } => write!(f, "card {} -> slot {}", card, slot),
            Event::RemoveCard { slot } => write!(f, "slot {} cleared", slot),
            Event::PlaceMarker { player, slot } => write!(f, "P{} marks slot {}", player, slot),
            Event::RemoveMarker { player, slot } => write!(f, "P{} unmarks slot {}", player, slot),
            Event::Score { player, score } => write!(f, "P{} score {}", player, score),
            Event::Freeze { player, millis } => write!(f, "P{} frozen {}ms", player, millis),
            Event::Countdown { millis, warn: true } => write!(f, "{}ms left (hurry)", millis),
            Event::Countdown { millis, .. } => write!(f, "{}ms left", millis),
            Event::Hint { slots, features } => write!(f, "hint {:?} {:?}", slots, features),
            Event::Winners(winners) => write!(
                f,
                "winners: {}",
                winners
                    .iter()
                    .map(|p| format!("P{}", p))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn player_of_marker_event() {
        let event = Event::PlaceMarker { player: 2, slot: 7 };
        assert_eq!(event.player(), Some(2));
        assert_eq!(event.slot(), Some(7));
    }
    #[test]
    fn countdown_has_no_player() {
        let event = Event::Countdown { millis: 10, warn: false };
        assert_eq!(event.player(), None);
        assert_eq!(event.slot(), None);
    }
    #[test]
    fn winners_display() {
        assert_eq!(Event::Winners(vec![0, 3]).to_string(), "winners: P0, P3");
    }
}
