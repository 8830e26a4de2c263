use crate::Config;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for the turn countdown.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    /// Time between forced board refreshes; zero disables the deadline.
    pub turn: Duration,
    /// Remaining time below which the countdown is shown as a warning.
    pub warning: Duration,
    /// Countdown refresh period.
    pub tick: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for TimerConfig {
    fn from(config: &Config) -> Self {
        Self {
            turn: config.turn(),
            warning: config.warning(),
            tick: config.tick(),
        }
    }
}

/// Manages the turn deadline.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    deadline: Option<Instant>,
    warned: bool,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
            warned: false,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }
    /// Starts a fresh turn. Untimed play never sets a deadline.
    pub fn start(&mut self) {
        self.warned = false;
        self.deadline = match self.is_untimed() {
            true => None,
            false => Some(Instant::now() + self.config.turn),
        };
    }
    pub fn clear(&mut self) {
        self.deadline = None;
        self.warned = false;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn is_untimed(&self) -> bool {
        self.config.turn.is_zero()
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
    pub fn is_warning(&self) -> bool {
        self.remaining()
            .map(|r| r <= self.config.warning)
            .unwrap_or(false)
    }
    /// True exactly once per turn, the first time the warning window is
    /// observed.
    pub fn enter_warning(&mut self) -> bool {
        match self.is_warning() && !self.warned {
            true => {
                self.warned = true;
                true
            }
            false => false,
        }
    }
    /// Next instant the referee should wake without a claim: the next
    /// display tick or the deadline, whichever is first.
    pub fn next_wake(&self) -> Instant {
        let tick = Instant::now() + self.config.tick;
        self.deadline.map(|d| d.min(tick)).unwrap_or(tick)
    }
}
