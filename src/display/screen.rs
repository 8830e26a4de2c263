use super::event::*;

/// Receiver of display notifications.
///
/// Called from the referee and player tasks, sometimes while slot locks
/// are held, so implementations must return promptly and never block.
pub trait Screen: Send + Sync {
    fn notify(&self, event: Event);
}
