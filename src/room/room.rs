use super::*;
use crate::Config;
use crate::Shutdown;
use crate::board::*;
use crate::display::*;
use crate::oracle::*;
use crate::players::*;
use crate::referee::*;
use std::sync::Arc;

/// Everything needed to start a game: configuration, the matching rule,
/// and where events go.
///
/// Players `0..humans` are fed from outside through the session; the
/// remaining `computers` players each get a random [`Generator`].
pub struct Room {
    config: Config,
    oracle: Arc<dyn Oracle>,
    screen: Arc<dyn Screen>,
    pile: Option<Pile>,
}

impl Room {
    pub fn new(config: Config, oracle: Arc<dyn Oracle>, screen: Arc<dyn Screen>) -> Self {
        Self {
            config,
            oracle,
            screen,
            pile: None,
        }
    }
    /// Plays with exactly these cards instead of the full deck.
    pub fn with_pile(mut self, pile: Pile) -> Self {
        self.pile = Some(pile);
        self
    }

    /// Seats every player and starts the referee.
    pub fn start(self) -> Session {
        let config = self.config;
        let shutdown = Shutdown::default();
        let board = Arc::new(Board::new(
            config.slots,
            config.deck,
            config.players(),
            config.table_delay(),
            self.screen.clone(),
        ));
        let mut referee = Referee::new(
            &config,
            board.clone(),
            self.oracle,
            self.screen.clone(),
            shutdown.clone(),
        );
        if let Some(pile) = self.pile {
            referee = referee.with_pile(pile);
        }
        let seats = (0..config.players())
            .map(|p| {
                let generator = (p >= config.humans)
                    .then(|| Generator::new(config.slots, config.computer_delay()));
                Agent::spawn(
                    p,
                    board.clone(),
                    self.screen.clone(),
                    config.tick(),
                    generator,
                )
            })
            .collect::<Vec<_>>();
        seats.iter().for_each(|seat| referee.seat(seat.shutdown()));
        log::info!(
            "[room] {} humans, {} computers, {} slots",
            config.humans,
            config.computers,
            config.slots
        );
        let referee = tokio::spawn(referee.run());
        Session::new(board, seats, referee, shutdown)
    }

    /// Plays to the end and reports the result.
    pub async fn run(self) -> anyhow::Result<Summary> {
        self.start().finish().await.map(|(summary, _)| summary)
    }
}
