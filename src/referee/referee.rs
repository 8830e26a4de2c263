use super::*;
use crate::Card;
use crate::Config;
use crate::Score;
use crate::Shutdown;
use crate::Slot;
use crate::board::*;
use crate::claims::*;
use crate::display::*;
use crate::oracle::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Why the referee stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    Claim,
    Tick,
    Shutdown,
}

/// Owns the draw pile, the turn timer, and the scores, and drives the
/// round loop:
///
/// - Dealing: fill vacant slots under all slot locks, start the turn
/// - Running: wait for a claim, the deadline, or a countdown tick
/// - Evaluating: drain the claim queue in arrival order
/// - Resetting: lift all marks and return every card to the pile
///
/// The game finishes when pile and board together hold no legal triple.
/// On exit the referee terminates every seated player.
///
/// The turn deadline restarts on every deal and after every accepted
/// claim. Penalties and stale claims leave it running.
pub struct Referee {
    board: Arc<Board>,
    oracle: Arc<dyn Oracle>,
    screen: Arc<dyn Screen>,
    shutdown: Shutdown,
    players: Vec<Shutdown>,
    pile: Pile,
    timer: Timer,
    phase: Phase,
    scores: Vec<Score>,
    point: Duration,
    penalty: Duration,
    hints: bool,
}

impl Referee {
    pub fn new(
        config: &Config,
        board: Arc<Board>,
        oracle: Arc<dyn Oracle>,
        screen: Arc<dyn Screen>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            scores: vec![0; board.players()],
            pile: Pile::new(config.deck),
            timer: Timer::new(TimerConfig::from(config)),
            phase: Phase::default(),
            players: Vec::new(),
            point: config.point_freeze(),
            penalty: config.penalty_freeze(),
            hints: config.hints,
            board,
            oracle,
            screen,
            shutdown,
        }
    }
    /// Replaces the full deck with a specific set of cards.
    pub fn with_pile(mut self, pile: Pile) -> Self {
        self.pile = pile;
        self
    }
    /// Registers a player's termination handle, triggered when the game ends.
    pub fn seat(&mut self, player: Shutdown) {
        self.players.push(player);
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }
    pub fn pile(&self) -> &Pile {
        &self.pile
    }
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

impl Referee {
    pub async fn run(mut self) -> Summary {
        log::info!(
            "[referee] starting: {} cards, {} slots, {} players",
            self.pile.len(),
            self.board.size(),
            self.board.players()
        );
        loop {
            if self.shutdown.is_triggered() {
                self.phase = Phase::Terminated;
                break;
            }
            if self.is_exhausted().await {
                self.phase = Phase::Finished;
                break;
            }
            self.pile.shuffle();
            self.deal().await;
            self.play().await;
            if self.shutdown.is_triggered() {
                self.phase = Phase::Terminated;
                break;
            }
            self.reset().await;
        }
        self.conclude()
    }

    async fn play(&mut self) {
        let mut changed = true;
        loop {
            self.phase = Phase::Running;
            if !self.board.claims().is_empty() {
                self.evaluate().await;
                changed = true;
            }
            if changed && self.timer.is_untimed() && !self.board_has_set().await {
                log::debug!("[referee] no legal triple on the board");
                return;
            }
            changed = false;
            self.countdown();
            if self.timer.expired() {
                log::debug!("[referee] turn expired");
                return;
            }
            match self.sleep().await {
                Wake::Shutdown => return,
                wake => log::trace!("[referee] woke on {:?}", wake),
            }
        }
    }

    async fn sleep(&self) -> Wake {
        tokio::select! {
            biased;
            _ = self.shutdown.wait() => Wake::Shutdown,
            _ = self.board.claims().wait() => Wake::Claim,
            _ = tokio::time::sleep_until(self.timer.next_wake()) => Wake::Tick,
        }
    }

    fn conclude(&self) -> Summary {
        debug_assert!(self.phase.is_over());
        let winners = Summary::winners(&self.scores);
        match self.phase {
            Phase::Finished => {
                log::info!("[referee] no legal triple left, game over");
                self.screen.notify(Event::Winners(winners.clone()));
            }
            _ => log::info!("[referee] terminated"),
        }
        self.terminate();
        Summary {
            scores: self.scores.clone(),
            winners,
            phase: self.phase,
        }
    }

    fn terminate(&self) {
        for (p, player) in self.players.iter().enumerate().rev() {
            log::debug!("[referee] terminating P{}", p);
            player.trigger();
        }
    }
}

// board mutation
impl Referee {
    async fn deal(&mut self) {
        self.phase = Phase::Dealing;
        let mut hold = self.board.hold_all().await;
        for slot in hold.vacant() {
            match self.pile.draw() {
                Some(card) => hold.place(card, slot).await,
                None => break,
            }
        }
        self.timer.start();
        log::debug!(
            "[referee] dealt {} cards, {} left in pile",
            hold.occupied().len(),
            self.pile.len()
        );
        if self.hints {
            self.hint(&hold.cards());
        }
    }

    async fn evaluate(&mut self) {
        self.phase = Phase::Evaluating;
        while let Some(claim) = self.board.claims().pop() {
            self.judge(claim).await;
        }
    }

    /// Checks one claim against the live board and answers it. An accepted
    /// triple is replaced before the next claim is examined.
    async fn judge(&mut self, claim: Claim) {
        let player = claim.player();
        let mut hold = self.board.hold(claim.slots()).await;
        if !claim.is_live(|slot| hold.card(slot)) {
            drop(hold);
            log::debug!("[referee] P{} claim {:?} is stale", player, claim.slots());
            claim.answer(Verdict::Stale);
            return;
        }
        if !self.oracle.is_set(&claim.cards()) {
            drop(hold);
            log::debug!("[referee] P{} claim {:?} rejected", player, claim.cards());
            self.board.release(player);
            claim.answer(Verdict::Penalty(self.penalty));
            return;
        }
        self.scores[player] += 1;
        log::info!("[referee] P{} scores with {:?}", player, claim.cards());
        self.screen.notify(Event::Score {
            player,
            score: self.scores[player],
        });
        for slot in claim.slots() {
            hold.remove(slot).await;
        }
        for slot in hold.vacant() {
            match self.pile.draw() {
                Some(card) => hold.place(card, slot).await,
                None => break,
            }
        }
        drop(hold);
        self.timer.start();
        claim.answer(Verdict::Point(self.point));
    }

    async fn reset(&mut self) {
        self.phase = Phase::Resetting;
        let mut hold = self.board.hold_all().await;
        hold.clear_markers();
        while let Some(claim) = self.board.claims().pop() {
            claim.answer(Verdict::Stale);
        }
        for slot in hold.occupied() {
            let card = hold.remove(slot).await;
            self.pile.give_back(card);
        }
        drop(hold);
        self.timer.clear();
        log::debug!("[referee] board returned, {} cards in pile", self.pile.len());
    }
}

// queries
impl Referee {
    async fn is_exhausted(&self) -> bool {
        let mut cards = self.pile.cards();
        cards.extend(self.board.snapshot().await.on_board());
        !self.oracle.has_set(&cards)
    }

    async fn board_has_set(&self) -> bool {
        self.oracle.has_set(&self.board.snapshot().await.on_board())
    }

    fn countdown(&mut self) {
        if let Some(remaining) = self.timer.remaining() {
            if self.timer.enter_warning() {
                log::info!("[referee] {}ms left in the turn", remaining.as_millis());
            }
            self.screen.notify(Event::Countdown {
                millis: remaining.as_millis() as u64,
                warn: self.timer.is_warning(),
            });
        }
    }

    fn hint(&self, cards: &[(Slot, Card)]) {
        let slots = cards
            .iter()
            .map(|(s, c)| (*c, *s))
            .collect::<BTreeMap<Card, Slot>>();
        let faces = slots.keys().copied().collect::<Vec<_>>();
        for triple in self.oracle.find_sets(&faces, usize::MAX) {
            let at = triple.map(|card| slots[&card]);
            let features = triple
                .iter()
                .map(|card| self.oracle.features(*card))
                .collect::<Vec<_>>();
            log::info!("[referee] hint: slots {:?} features {:?}", at, features);
            self.screen.notify(Event::Hint {
                slots: at,
                features,
            });
        }
    }
}
