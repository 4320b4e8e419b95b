//! Shutdown coordination for runner tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Coordinator for pool-wide teardown.
///
/// Long-running tasks hold a [`ShutdownSignal`] and select against
/// [`ShutdownSignal::recv`]. The triggered flag makes the signal sticky:
/// a runner started after `trigger` exits on its first wait.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
            triggered: Arc::clone(&self.triggered),
        }
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Number of tasks still subscribed.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// A task-side handle on the shutdown signal.
pub struct ShutdownSignal {
    rx: broadcast::Receiver<()>,
    triggered: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Resolve when shutdown has been triggered, immediately if it
    /// already was.
    pub async fn recv(&mut self) {
        if self.is_triggered() {
            return;
        }
        // RecvError means the signal was either sent before we polled
        // (Lagged) or the coordinator is gone (Closed); both mean stop.
        let _ = self.rx.recv().await;
    }
}
