//! Store facade: observable state plus fire-and-forget dispatch.

use std::sync::Arc;

use tokio::runtime::Handle;

use super::effect::{Dispatch, Emitter};
use super::holder::{StateHolder, StateStream};
use super::intent::Intent;
use super::registry::{BindingKey, EffectRegistry};
use super::state::State;
use crate::config::StoreConfig;

/// A built store.
///
/// Cloning is cheap and every clone drives the same state: the facade
/// itself holds nothing but a shared reference.
pub struct Store<S: State, I: Intent> {
    inner: Arc<StoreInner<S, I>>,
}

struct StoreInner<S: State, I: Intent> {
    holder: Arc<StateHolder<S>>,
    /// Read-only once the store exists.
    registry: EffectRegistry<S, I>,
    runtime: Handle,
    config: Arc<StoreConfig>,
}

impl<S: State, I: Intent> Clone for Store<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, I: Intent> Store<S, I> {
    pub(crate) fn new(
        initial: S,
        registry: EffectRegistry<S, I>,
        runtime: Handle,
        config: StoreConfig,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                holder: Arc::new(StateHolder::new(initial)),
                registry,
                runtime,
                config: Arc::new(config),
            }),
        }
    }

    /// Stream of states, starting with the current one.
    pub fn observe(&self) -> StateStream<S> {
        self.inner.holder.observe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> S {
        self.inner.holder.current()
    }

    /// Submit an intent.
    ///
    /// The effect is picked by the kind of the state current at this call
    /// and the kind of `intent`. With no matching binding this is a no-op.
    /// Otherwise the effect is spawned on the store's runtime and this
    /// returns without waiting for it.
    ///
    /// A panic inside an effect ends that effect's task only; the store
    /// does not observe it and keeps whatever was committed before.
    pub fn dispatch(&self, intent: I) {
        let state = self.inner.holder.current();
        let key = BindingKey::new(state.kind(), intent.kind());
        let config = &self.inner.config;

        let Some(effect) = self.inner.registry.lookup(&key) else {
            if config.log_unmatched {
                tracing::debug!(
                    store = %config.name,
                    state = ?key.state,
                    intent = ?key.intent,
                    "No effect bound, ignoring intent"
                );
            }
            return;
        };

        tracing::debug!(
            store = %config.name,
            state = ?key.state,
            intent = ?key.intent,
            "Starting effect"
        );

        let emitter = Emitter::new(Arc::clone(&self.inner.holder), Arc::clone(config));
        let run = effect(state, intent, self.redispatch(), emitter);
        let name = config.name.clone();
        self.inner.runtime.spawn(async move {
            run.await;
            tracing::debug!(
                store = %name,
                state = ?key.state,
                intent = ?key.intent,
                "Effect finished"
            );
        });
    }

    /// Dispatch handle bound to this store, passed into every effect run.
    fn redispatch(&self) -> Dispatch<I> {
        let store = self.clone();
        Dispatch::new(move |intent| store.dispatch(intent))
    }
}
