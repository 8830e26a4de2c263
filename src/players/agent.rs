use super::*;
use crate::Position;
use crate::Shutdown;
use crate::Slot;
use crate::TRIPLE;
use crate::board::*;
use crate::claims::*;
use crate::display::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::*;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Awaiting,
    Frozen,
    Terminated,
}

/// One participant, running in its own task.
///
/// - Idle: take the next slot selection, toggle a mark on the board
/// - Awaiting: the third mark became a claim; wait for its verdict
/// - Frozen: sit out the freeze the verdict carried
///
/// Selections that arrive while awaiting or frozen are dropped. The
/// agent's own [`Shutdown`] interrupts every wait; it then stops its
/// generator, if any, and exits without touching pending verdicts.
pub struct Agent {
    id: Position,
    board: Arc<Board>,
    screen: Arc<dyn Screen>,
    inbox: UnboundedReceiver<Slot>,
    shutdown: Shutdown,
    tick: Duration,
    state: State,
    tally: Tally,
    generator: Option<JoinHandle<()>>,
}

impl Agent {
    /// Starts the agent (and its generator, for computer players) and
    /// returns the seat the room and referee use to reach it.
    pub fn spawn(
        id: Position,
        board: Arc<Board>,
        screen: Arc<dyn Screen>,
        tick: Duration,
        generator: Option<Generator>,
    ) -> Seat {
        let (tx, rx) = unbounded_channel();
        let shutdown = Shutdown::default();
        let generator = generator.map(|g| tokio::spawn(g.run(tx.clone(), shutdown.clone())));
        let agent = Self {
            id,
            board,
            screen,
            tick,
            generator,
            inbox: rx,
            shutdown: shutdown.clone(),
            state: State::Idle,
            tally: Tally::default(),
        };
        Seat::new(id, tx, shutdown, tokio::spawn(agent.run()))
    }

    async fn run(mut self) -> Tally {
        log::debug!("[player P{}] seated", self.id);
        loop {
            self.enter(State::Idle);
            let slot = tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                slot = self.inbox.recv() => match slot {
                    Some(slot) => slot,
                    None => break,
                },
            };
            let Mark::Claimed(reply) = self.select(slot).await else {
                continue;
            };
            self.tally.claims += 1;
            let Some(verdict) = self.await_verdict(reply).await else {
                break;
            };
            self.tally.verdicts.push(verdict);
            if !self.apply(verdict).await {
                break;
            }
        }
        self.enter(State::Terminated);
        self.shutdown.trigger();
        if let Some(generator) = self.generator.take() {
            if let Err(e) = generator.await {
                log::warn!("[player P{}] generator failed: {}", self.id, e);
            }
        }
        log::debug!(
            "[player P{}] left after {} claims ({} points)",
            self.id,
            self.tally.claims,
            self.tally.points()
        );
        self.tally
    }

    fn enter(&mut self, state: State) {
        if self.state != state {
            log::trace!("[player P{}] {:?} -> {:?}", self.id, self.state, state);
            self.state = state;
        }
    }

    /// Toggles the mark on `slot`.
    async fn select(&self, slot: Slot) -> Mark {
        if self.board.is_marked(self.id, slot) {
            self.board.remove_marker(self.id, slot).await
        } else if self.board.markers(self.id).len() < TRIPLE {
            self.board.place_marker(self.id, slot).await
        } else {
            Mark::Rejected
        }
    }

    /// None if the game ended first. A verdict already sent is still taken.
    async fn await_verdict(&mut self, mut reply: oneshot::Receiver<Verdict>) -> Option<Verdict> {
        self.enter(State::Awaiting);
        loop {
            tokio::select! {
                biased;
                verdict = &mut reply => return verdict.ok(),
                _ = self.shutdown.wait() => return None,
                Some(slot) = self.inbox.recv() => {
                    log::trace!("[player P{}] awaiting verdict, dropped {}", self.id, slot)
                }
            }
        }
    }

    /// False if the game ended during the freeze.
    async fn apply(&mut self, verdict: Verdict) -> bool {
        log::debug!("[player P{}] verdict {}", self.id, verdict);
        match verdict {
            Verdict::Stale => true,
            _ => self.freeze(verdict.freeze()).await,
        }
    }

    async fn freeze(&mut self, duration: Duration) -> bool {
        if duration.is_zero() {
            return true;
        }
        self.enter(State::Frozen);
        let until = Instant::now() + duration;
        let mut report = Instant::now();
        loop {
            let now = Instant::now();
            if now >= until {
                break;
            }
            if now >= report {
                self.screen.notify(Event::Freeze {
                    player: self.id,
                    millis: (until - now).as_millis() as u64,
                });
                report = now + self.tick;
            }
            tokio::select! {
                biased;
                _ = self.shutdown.wait() => return false,
                _ = tokio::time::sleep_until(report.min(until)) => {}
                Some(slot) = self.inbox.recv() => {
                    log::trace!("[player P{}] frozen, dropped {}", self.id, slot)
                }
            }
        }
        self.screen.notify(Event::Freeze {
            player: self.id,
            millis: 0,
        });
        true
    }
}
