use crate::claims::Verdict;
use tokio::sync::oneshot;

/// Outcome of a marker request.
#[derive(Debug)]
pub enum Mark {
    /// Nothing changed: empty slot, pending player, or no room.
    Rejected,
    Placed,
    Removed,
    /// Third mark placed; the claim is queued and its verdict will
    /// arrive here.
    Claimed(oneshot::Receiver<Verdict>),
}

impl Mark {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Mark::Rejected)
    }
}
