//! Screen state container
//!
//! Each screen owns one holder. The snapshot is never mutated in place:
//! every transition builds a new value and publishes it through a `watch`
//! channel, so subscribers always observe complete states.

use std::future::Future;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Receiver for screen state changes
pub type StateWatcher<S> = watch::Receiver<S>;

pub struct StateHolder<S> {
    sender: watch::Sender<S>,
    receiver: watch::Receiver<S>,
    cancellation: CancellationToken,
}

impl<S> StateHolder<S>
where
    S: Clone + Send + Sync,
{
    pub fn new(initial: S) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            sender,
            receiver,
            cancellation: CancellationToken::new(),
        }
    }

    /// Current state (fast, cloned)
    pub fn snapshot(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> StateWatcher<S> {
        self.receiver.clone()
    }

    /// Replace the state with one derived from the current snapshot.
    /// Ignored once the holder is disposed.
    pub fn replace<F>(&self, f: F)
    where
        F: FnOnce(&S) -> S,
    {
        if self.is_disposed() {
            return;
        }
        let next = f(&*self.receiver.borrow());
        self.sender.send_replace(next);
    }

    /// Conditional transition, checked and applied under the channel lock.
    /// Returns whether a new state was published.
    pub fn try_replace<F>(&self, f: F) -> bool
    where
        F: FnOnce(&S) -> Option<S>,
    {
        if self.is_disposed() {
            return false;
        }
        self.sender.send_if_modified(|state| match f(state) {
            Some(next) => {
                *state = next;
                true
            }
            None => false,
        })
    }

    /// Run a request tied to the holder's lifetime.
    /// Returns `None` if the holder was disposed before it completed.
    pub async fn scoped<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => None,
            output = fut => Some(output),
        }
    }

    /// Abandon in-flight requests; their results are never applied
    pub fn dispose(&self) {
        self.cancellation.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}
