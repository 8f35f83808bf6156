//! Trailing-edge debounce for search input

use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle};

/// Quiet period before typed search text is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Emits the most recent value once no new value has arrived for `delay`.
///
/// Each `push` aborts the pending timer task and spawns a fresh one, so only
/// the last value of a burst reaches the receiver.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    pub fn push(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended
            let _ = tx.send(value);
        }));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
