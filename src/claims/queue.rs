use super::*;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Notify;

/// FIFO of claims awaiting the referee.
///
/// `push` never waits beyond the queue lock. Every push stores a wake
/// permit, so a referee that starts waiting after the push still wakes.
#[derive(Debug, Default)]
pub struct Queue {
    claims: Mutex<VecDeque<Claim>>,
    wake: Notify,
}

impl Queue {
    pub fn push(&self, claim: Claim) {
        log::debug!("[claims] P{} queued {:?}", claim.player(), claim.slots());
        self.claims
            .lock()
            .expect("claim queue poisoned")
            .push_back(claim);
        self.wake.notify_one();
    }
    /// Oldest pending claim.
    pub fn pop(&self) -> Option<Claim> {
        self.claims.lock().expect("claim queue poisoned").pop_front()
    }
    pub fn len(&self) -> usize {
        self.claims.lock().expect("claim queue poisoned").len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Resolves after the next push, or immediately if one happened
    /// since the last wake.
    pub async fn wait(&self) {
        self.wake.notified().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[test]
    fn fifo_order() {
        let queue = Queue::default();
        let (a, _ra) = Claim::new(0, [0, 1, 2], [0, 1, 2]);
        let (b, _rb) = Claim::new(1, [3, 4, 5], [3, 4, 5]);
        queue.push(a);
        queue.push(b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().map(|c| c.player()), Some(0));
        assert_eq!(queue.pop().map(|c| c.player()), Some(1));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }
    #[tokio::test]
    async fn push_before_wait_is_not_lost() {
        let queue = Queue::default();
        let (claim, _rx) = Claim::new(0, [0, 1, 2], [0, 1, 2]);
        queue.push(claim);
        tokio::time::timeout(Duration::from_millis(100), queue.wait())
            .await
            .expect("permit stored");
    }
    #[tokio::test]
    async fn push_wakes_waiter() {
        let queue = std::sync::Arc::new(Queue::default());
        let waiter = queue.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let (claim, _rx) = Claim::new(0, [0, 1, 2], [0, 1, 2]);
        queue.push(claim);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("woken")
            .expect("joined");
    }
}
