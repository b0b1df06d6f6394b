//! Current-state cell with a replaying observer stream.
//!
//! One exclusive lock guards the value together with the observer list,
//! so "replace the value, then notify everyone" is a single step with
//! respect to other commits and to new observers subscribing.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::RwLock;
use tokio::sync::mpsc;

use super::state::State;

/// Holds the store's current state and fans out every commit.
pub struct StateHolder<S> {
    inner: RwLock<HolderInner<S>>,
}

struct HolderInner<S> {
    current: S,
    /// One unbounded channel per live observer. Unbounded keeps commits
    /// from ever waiting on a slow observer.
    observers: Vec<mpsc::UnboundedSender<S>>,
    commits: u64,
}

impl<S: State> StateHolder<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: RwLock::new(HolderInner {
                current: initial,
                observers: Vec::new(),
                commits: 0,
            }),
        }
    }

    /// Snapshot of the latest committed state.
    pub fn current(&self) -> S {
        self.inner.read().current.clone()
    }

    /// Subscribe to state changes.
    ///
    /// The returned stream yields the current state first, then every
    /// later commit in commit order. It never ends while the holder lives.
    pub fn observe(&self) -> StateStream<S> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.write();
        // A store that stops committing never reaches the prune in `set`.
        inner.observers.retain(|observer| !observer.is_closed());
        // The receiver is still in hand, so this send cannot fail.
        let _ = sender.send(inner.current.clone());
        inner.observers.push(sender);
        StateStream { receiver }
    }

    /// Replace the current state and notify all observers.
    ///
    /// Returns the commit sequence number (1 for the first commit after
    /// the initial state). Observers whose stream was dropped are pruned.
    pub fn set(&self, state: S) -> u64 {
        let mut inner = self.inner.write();
        inner
            .observers
            .retain(|observer| observer.send(state.clone()).is_ok());
        inner.current = state;
        inner.commits += 1;
        inner.commits
    }

    /// Number of observers still subscribed as of the last commit or
    /// subscription.
    pub fn observer_count(&self) -> usize {
        self.inner.read().observers.len()
    }
}

/// Live stream of states returned by [`StateHolder::observe`].
pub struct StateStream<S> {
    receiver: mpsc::UnboundedReceiver<S>,
}

impl<S> StateStream<S> {
    /// Wait for the next state.
    ///
    /// Returns `None` only once the owning store has been dropped.
    pub async fn next(&mut self) -> Option<S> {
        self.receiver.recv().await
    }

    /// Take an already-delivered state without waiting.
    pub fn try_next(&mut self) -> Option<S> {
        self.receiver.try_recv().ok()
    }
}

impl<S> Stream for StateStream<S> {
    type Item = S;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}
