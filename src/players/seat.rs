use super::*;
use crate::Position;
use crate::Shutdown;
use crate::Slot;
use anyhow::Context;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Handle to a running [`Agent`]: its input channel, its termination
/// switch, and its task.
#[derive(Debug)]
pub struct Seat {
    id: Position,
    inbox: UnboundedSender<Slot>,
    shutdown: Shutdown,
    handle: JoinHandle<Tally>,
}

impl Seat {
    pub fn new(
        id: Position,
        inbox: UnboundedSender<Slot>,
        shutdown: Shutdown,
        handle: JoinHandle<Tally>,
    ) -> Self {
        Self {
            id,
            inbox,
            shutdown,
            handle,
        }
    }
    pub fn inbox(&self) -> UnboundedSender<Slot> {
        self.inbox.clone()
    }
    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }
    /// Feeds a slot selection; false once the agent has exited.
    pub fn select(&self, slot: Slot) -> bool {
        self.inbox.send(slot).is_ok()
    }
    pub async fn join(self) -> anyhow::Result<Tally> {
        self.handle
            .await
            .with_context(|| format!("player P{} task", self.id))
    }
}
