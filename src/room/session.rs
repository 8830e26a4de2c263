use crate::Position;
use crate::Shutdown;
use crate::Slot;
use crate::board::Board;
use crate::players::*;
use crate::referee::Summary;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A game in progress.
pub struct Session {
    board: Arc<Board>,
    seats: Vec<Seat>,
    referee: JoinHandle<Summary>,
    shutdown: Shutdown,
}

impl Session {
    pub fn new(
        board: Arc<Board>,
        seats: Vec<Seat>,
        referee: JoinHandle<Summary>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            board,
            seats,
            referee,
            shutdown,
        }
    }
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }
    /// Ends the game early; the referee then releases every player.
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }
    pub fn inboxes(&self) -> Vec<UnboundedSender<Slot>> {
        self.seats.iter().map(Seat::inbox).collect()
    }
    /// Feeds a selection to one player; false if it is gone.
    pub fn select(&self, player: Position, slot: Slot) -> bool {
        self.seats
            .get(player)
            .map(|seat| seat.select(slot))
            .unwrap_or(false)
    }

    /// Waits for the referee to finish, then for every player to leave.
    pub async fn finish(self) -> anyhow::Result<(Summary, Vec<Tally>)> {
        let summary = self.referee.await.context("referee task")?;
        let tallies = futures::future::join_all(self.seats.into_iter().map(Seat::join))
            .await
            .into_iter()
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("[room] {}", summary);
        Ok((summary, tallies))
    }
}
