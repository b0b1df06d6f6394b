//! Effect functions and the handles passed into them.
//!
//! An effect receives the state snapshot taken at dispatch time, the
//! intent that matched, a [`Dispatch`] handle for follow-up intents and an
//! [`Emitter`] for the states it produces. It runs as its own task.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::holder::StateHolder;
use super::state::State;
use crate::config::StoreConfig;

/// Future returned by a bound effect.
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Type-erased effect as stored in the registry.
pub type EffectFn<S, I> = Box<dyn Fn(S, I, Dispatch<I>, Emitter<S>) -> EffectFuture + Send + Sync>;

/// Erase an async effect closure into an [`EffectFn`].
pub fn boxed_effect<S, I, F, Fut>(effect: F) -> EffectFn<S, I>
where
    F: Fn(S, I, Dispatch<I>, Emitter<S>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Box::new(move |state, intent, dispatch, emitter| Box::pin(effect(state, intent, dispatch, emitter)))
}

/// Re-dispatch capability handed to every effect run.
///
/// Calling [`dispatch`](Dispatch::dispatch) behaves exactly like
/// `Store::dispatch` on the store that started the effect: it never
/// blocks and is a no-op when nothing is bound.
pub struct Dispatch<I> {
    sink: Arc<dyn Fn(I) + Send + Sync>,
}

impl<I> Dispatch<I> {
    pub fn new(sink: impl Fn(I) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn dispatch(&self, intent: I) {
        (self.sink)(intent)
    }
}

impl<I> Clone for Dispatch<I> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Commits the states an effect produces.
///
/// Each [`emit`](Emitter::emit) is committed before it returns, so states
/// from one effect land in the order they were emitted and an intent
/// dispatched right after an emit is matched against the emitted state.
pub struct Emitter<S> {
    holder: Arc<StateHolder<S>>,
    config: Arc<StoreConfig>,
}

impl<S: State> Emitter<S> {
    pub(crate) fn new(holder: Arc<StateHolder<S>>, config: Arc<StoreConfig>) -> Self {
        Self { holder, config }
    }

    /// Commit one state.
    pub fn emit(&self, state: S) {
        if self.config.trace_commits {
            let commit = self.holder.set(state.clone());
            tracing::trace!(
                store = %self.config.name,
                commit = commit,
                state = ?state,
                "Committed state"
            );
        } else {
            self.holder.set(state);
        }
    }

    /// Commit a sequence of states in iteration order.
    pub fn emit_all(&self, states: impl IntoIterator<Item = S>) {
        for state in states {
            self.emit(state);
        }
    }
}

impl<S> Clone for Emitter<S> {
    fn clone(&self) -> Self {
        Self {
            holder: Arc::clone(&self.holder),
            config: Arc::clone(&self.config),
        }
    }
}
