use std::sync::Arc;
use tokio::sync::watch;

/// Broadcast termination flag.
///
/// Every clone observes the same flag. Waiting is edge-free: a task that
/// starts waiting after [`Shutdown::trigger`] returns immediately.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Shutdown {
    fn default() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }
}

impl Shutdown {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
    /// Resolves once the flag is set.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        let _ = rx.wait_for(|flag| *flag).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    #[test]
    fn starts_clear() {
        let shutdown = Shutdown::default();
        assert!(!shutdown.is_triggered());
    }
    #[test]
    fn clones_share_flag() {
        let shutdown = Shutdown::default();
        let clone = shutdown.clone();
        clone.trigger();
        assert!(shutdown.is_triggered());
    }
    #[tokio::test]
    async fn wait_after_trigger_returns() {
        let shutdown = Shutdown::default();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_millis(100), shutdown.wait())
            .await
            .expect("already triggered");
    }
    #[tokio::test]
    async fn wait_wakes_on_trigger() {
        let shutdown = Shutdown::default();
        let waiter = shutdown.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("woken")
            .expect("joined");
    }
}
