use super::*;
use crate::Config;
use crate::Position;
use colored::Colorize;

/// Renders events to the terminal through the logger.
///
/// High-frequency events (countdown, freeze ticks) go to trace so the
/// terminal only shows board changes, scores, and the final result.
#[derive(Debug, Default)]
pub struct Console {
    names: Vec<String>,
}

impl From<&Config> for Console {
    fn from(config: &Config) -> Self {
        Self {
            names: (0..config.players()).map(|p| config.name(p)).collect(),
        }
    }
}

impl Console {
    fn name(&self, player: Position) -> String {
        self.names
            .get(player)
            .cloned()
            .unwrap_or_else(|| format!("P{}", player))
    }
}

impl Screen for Console {
    fn notify(&self, event: Event) {
        match event {
            Event::PlaceCard { card, slot } => log::debug!("[screen] card {:>2} @ slot {:>2}", card, slot),
            Event::RemoveCard { slot } => log::debug!("[screen] slot {:>2} cleared", slot),
            Event::PlaceMarker { player, slot } => {
                log::debug!("[screen] {} marks {}", self.name(player), slot)
            }
            Event::RemoveMarker { player, slot } => {
                log::debug!("[screen] {} unmarks {}", self.name(player), slot)
            }
            Event::Score { player, score } => log::info!(
                "[screen] {} scores -> {}",
                self.name(player).bold(),
                score.to_string().green()
            ),
            Event::Freeze { player, millis } => {
                log::trace!("[screen] {} frozen {}ms", self.name(player), millis)
            }
            Event::Countdown { millis, warn: true } => {
                log::trace!("[screen] {}", format!("{}ms", millis).red())
            }
            Event::Countdown { millis, warn: false } => log::trace!("[screen] {}ms", millis),
            Event::Hint { slots, features } => {
                log::info!("[screen] hint: slots {:?} features {:?}", slots, features)
            }
            Event::Winners(winners) => log::info!(
                "[screen] {} {}",
                "winner(s):".bold(),
                winners
                    .iter()
                    .map(|p| self.name(*p).green().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}
