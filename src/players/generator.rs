use crate::Shutdown;
use crate::Slot;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Key presses for a computer player: a uniformly random slot every
/// `delay`. It knows nothing about freezes; the agent drops whatever
/// arrives while it cannot act.
#[derive(Debug)]
pub struct Generator {
    rng: SmallRng,
    slots: usize,
    delay: Duration,
}

impl Generator {
    pub fn new(slots: usize, delay: Duration) -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
            slots,
            delay,
        }
    }
    pub fn seeded(slots: usize, delay: Duration, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            slots,
            delay,
        }
    }
    pub fn press(&mut self) -> Slot {
        self.rng.random_range(0..self.slots)
    }
    pub async fn run(mut self, inbox: UnboundedSender<Slot>, shutdown: Shutdown) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = tokio::time::sleep(self.delay) => {}
            }
            if inbox.send(self.press()).is_err() {
                break;
            }
        }
        log::trace!("[generator] stopped");
    }
}
