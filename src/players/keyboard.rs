use crate::Config;
use crate::Position;
use crate::Slot;
use anyhow::Context;
use std::collections::HashMap;
use std::io::BufRead;
use tokio::sync::mpsc::UnboundedSender;

/// Maps terminal keys to (player, slot) selections for human players.
///
/// Reads stdin on a dedicated thread; a line is a burst of key presses.
#[derive(Debug, Default)]
pub struct Keyboard {
    keys: HashMap<char, (Position, Slot)>,
}

impl From<&Config> for Keyboard {
    fn from(config: &Config) -> Self {
        let mut keys = HashMap::new();
        for (player, map) in config.keys.iter().take(config.humans).enumerate() {
            for (slot, key) in map.chars().take(config.slots).enumerate() {
                if let Some((other, _)) = keys.insert(key, (player, slot)) {
                    log::warn!("[keyboard] key {:?} taken from P{} by P{}", key, other, player);
                }
            }
        }
        Self { keys }
    }
}

impl Keyboard {
    pub fn route(&self, key: char) -> Option<(Position, Slot)> {
        self.keys.get(&key).copied()
    }
    /// Forwards every mapped key in `input` to its player's inbox.
    pub fn listen<R>(&self, input: R, inboxes: &[UnboundedSender<Slot>])
    where
        R: BufRead,
    {
        for line in input.lines() {
            let Ok(line) = line else { break };
            for key in line.chars() {
                match self.route(key) {
                    Some((player, slot)) => match inboxes.get(player) {
                        Some(inbox) if inbox.send(slot).is_ok() => {}
                        _ => log::debug!("[keyboard] P{} is not listening", player),
                    },
                    None => log::trace!("[keyboard] unmapped key {:?}", key),
                }
            }
        }
    }
    /// Listens on stdin from a detached thread.
    pub fn spawn(
        self,
        inboxes: Vec<UnboundedSender<Slot>>,
    ) -> anyhow::Result<std::thread::JoinHandle<()>> {
        std::thread::Builder::new()
            .name("keyboard".into())
            .spawn(move || self.listen(std::io::stdin().lock(), &inboxes))
            .context("spawn keyboard thread")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    fn keyboard() -> Keyboard {
        Keyboard::from(&Config {
            humans: 2,
            computers: 0,
            ..Config::default()
        })
    }
    #[test]
    fn routes_both_players() {
        let keyboard = keyboard();
        assert_eq!(keyboard.route('q'), Some((0, 0)));
        assert_eq!(keyboard.route('v'), Some((0, 11)));
        assert_eq!(keyboard.route('u'), Some((1, 0)));
        assert_eq!(keyboard.route('/'), Some((1, 11)));
        assert_eq!(keyboard.route('!'), None);
    }
    #[test]
    fn computers_get_no_keys() {
        let keyboard = Keyboard::from(&Config {
            humans: 1,
            computers: 1,
            ..Config::default()
        });
        assert_eq!(keyboard.route('q'), Some((0, 0)));
        assert_eq!(keyboard.route('u'), None);
    }
    #[test]
    fn listen_forwards_bursts() {
        let keyboard = keyboard();
        let (a, mut ra) = unbounded_channel();
        let (b, mut rb) = unbounded_channel();
        keyboard.listen("qw?\nu\n".as_bytes(), &[a, b]);
        assert_eq!(ra.try_recv(), Ok(0));
        assert_eq!(ra.try_recv(), Ok(1));
        assert!(ra.try_recv().is_err());
        assert_eq!(rb.try_recv(), Ok(0));
    }
}
