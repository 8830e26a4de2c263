//! Hand-off of completed triples from players to the referee.
//!
//! - [`Claim`]: immutable snapshot plus a one-shot reply channel
//! - [`Queue`]: FIFO of pending claims that wakes the referee
//! - [`Verdict`]: the only message ever sent on a reply channel
mod claim;
mod queue;
mod verdict;

pub use claim::*;
pub use queue::*;
pub use verdict::*;
