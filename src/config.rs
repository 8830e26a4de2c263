use crate::Position;
use crate::TRIPLE;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// Game configuration, read once at startup.
///
/// Durations are stored in milliseconds so the JSON form stays flat.
/// A `turn_millis` of zero selects untimed play: the board is refreshed
/// only once it holds no legal triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of board slots.
    pub slots: usize,
    /// Number of cards in the deck.
    pub deck: usize,
    /// Features per card.
    pub feature_count: usize,
    /// Distinct values per feature.
    pub feature_size: usize,
    /// Players fed from the keyboard.
    pub humans: usize,
    /// Players fed from the random generator.
    pub computers: usize,
    /// Display names, indexed by player.
    pub names: Vec<String>,
    /// Per-human key maps; the i-th character selects slot i.
    pub keys: Vec<String>,
    /// Log every legal triple after each deal.
    pub hints: bool,
    pub turn_millis: u64,
    pub warning_millis: u64,
    pub point_freeze_millis: u64,
    pub penalty_freeze_millis: u64,
    /// Artificial pause on every card placement and removal.
    pub table_delay_millis: u64,
    /// Countdown and freeze display refresh period.
    pub tick_millis: u64,
    /// Pause between generated key presses.
    pub computer_delay_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slots: 12,
            deck: 81,
            feature_count: 4,
            feature_size: 3,
            humans: 0,
            computers: 2,
            names: vec!["Ada".into(), "Bob".into()],
            keys: vec!["qwerasdfzxcv".into(), "uiopjkl;m,./".into()],
            hints: false,
            turn_millis: 60_000,
            warning_millis: 5_000,
            point_freeze_millis: 3_000,
            penalty_freeze_millis: 1_000,
            table_delay_millis: 0,
            tick_millis: 100,
            computer_delay_millis: 50,
        }
    }
}

impl Config {
    /// Reads and validates a JSON configuration file.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects shapes the game cannot be played with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.slots >= TRIPLE,
            "board needs at least {} slots, got {}",
            TRIPLE,
            self.slots
        );
        anyhow::ensure!(self.feature_size >= 2, "features need at least 2 values");
        let space = u32::try_from(self.feature_count)
            .ok()
            .and_then(|count| self.feature_size.checked_pow(count))
            .with_context(|| {
                format!(
                    "{} features of {} values overflow the card space",
                    self.feature_count, self.feature_size
                )
            })?;
        anyhow::ensure!(
            self.deck <= space,
            "deck of {} exceeds the {} distinct cards the features allow",
            self.deck,
            space
        );
        anyhow::ensure!(
            self.point_freeze_millis >= self.penalty_freeze_millis,
            "point freeze {}ms is shorter than penalty freeze {}ms",
            self.point_freeze_millis,
            self.penalty_freeze_millis
        );
        anyhow::ensure!(self.players() > 0, "no players configured");
        anyhow::ensure!(self.tick_millis > 0, "tick must be positive");
        for (i, keys) in self.keys.iter().take(self.humans).enumerate() {
            anyhow::ensure!(
                keys.chars().count() >= self.slots,
                "key map for player {} covers {} of {} slots",
                i,
                keys.chars().count(),
                self.slots
            );
        }
        anyhow::ensure!(
            self.keys.len() >= self.humans,
            "{} humans but only {} key maps",
            self.humans,
            self.keys.len()
        );
        Ok(())
    }

    pub fn players(&self) -> usize {
        self.humans + self.computers
    }
    pub fn name(&self, player: Position) -> String {
        self.names
            .get(player)
            .cloned()
            .unwrap_or_else(|| format!("P{}", player))
    }
    pub fn is_untimed(&self) -> bool {
        self.turn_millis == 0
    }
    pub fn turn(&self) -> Duration {
        Duration::from_millis(self.turn_millis)
    }
    pub fn warning(&self) -> Duration {
        Duration::from_millis(self.warning_millis)
    }
    pub fn point_freeze(&self) -> Duration {
        Duration::from_millis(self.point_freeze_millis)
    }
    pub fn penalty_freeze(&self) -> Duration {
        Duration::from_millis(self.penalty_freeze_millis)
    }
    pub fn table_delay(&self) -> Duration {
        Duration::from_millis(self.table_delay_millis)
    }
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
    #[test]
    fn rejects_tiny_board() {
        let config = Config {
            slots: 2,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn rejects_oversized_deck() {
        let config = Config {
            deck: 82,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn rejects_unrepresentable_geometry() {
        let config = Config {
            feature_count: 60,
            ..Config::default()
        };
        let err = config.validate().expect_err("overflow");
        assert!(err.to_string().contains("overflow"));
    }
    #[test]
    fn largest_geometry_builds_an_oracle() {
        use crate::oracle::*;
        let config = Config {
            feature_count: 40,
            feature_size: 3,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        let features = Features::from(&config);
        assert_eq!(features.features(0).len(), 40);
        assert!(features.is_set(&[0, 1, 2]));
    }
    #[test]
    fn rejects_inverted_freezes() {
        let config = Config {
            point_freeze_millis: 500,
            penalty_freeze_millis: 1_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(Config::default().point_freeze() > Config::default().penalty_freeze());
    }
    #[test]
    fn rejects_short_key_map() {
        let config = Config {
            humans: 1,
            keys: vec!["qwe".into()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn rejects_missing_key_map() {
        let config = Config {
            humans: 3,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
    #[test]
    fn partial_json_fills_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "slots": 3, "turn_millis": 0 }"#)
            .expect("valid json");
        assert_eq!(config.slots, 3);
        assert!(config.is_untimed());
        assert_eq!(config.deck, Config::default().deck);
    }
    #[test]
    fn names_fall_back_to_position() {
        let config = Config::default();
        assert_eq!(config.name(0), "Ada");
        assert_eq!(config.name(7), "P7");
    }
    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here.json").expect_err("missing");
        assert!(err.to_string().contains("read config"));
    }
}
