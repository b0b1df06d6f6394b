//! Store configuration phase.
//!
//! A [`StoreBuilder`] collects the initial state and the effect bindings,
//! then `build()` consumes it. Since the builder is gone once the store
//! exists, nothing can be bound to a store after it is handed out.

use std::future::Future;

use tokio::runtime::Handle;

use super::effect::{boxed_effect, Dispatch, Emitter};
use super::intent::Intent;
use super::registry::EffectRegistry;
use super::state::State;
use super::store::Store;
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Builder for a [`Store`].
///
/// # Example
/// ```ignore
/// let store = StoreBuilder::new()
///     .start_with(Screen::Idle)
///     .bind(ScreenKind::Idle, ActionKind::Load, |_state, _intent, _dispatch, emitter| async move {
///         emitter.emit(Screen::Loading);
///         emitter.emit(Screen::Loaded(fetch().await));
///     })?
///     .build()?;
/// ```
pub struct StoreBuilder<S: State, I: Intent> {
    initial: Option<S>,
    registry: EffectRegistry<S, I>,
    runtime: Option<Handle>,
    config: StoreConfig,
}

impl<S: State, I: Intent> Default for StoreBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Intent> StoreBuilder<S, I> {
    pub fn new() -> Self {
        Self {
            initial: None,
            registry: EffectRegistry::new(),
            runtime: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the initial state. Required before `build()`.
    pub fn start_with(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register an effect that runs when an intent of kind `intent` is
    /// dispatched while the current state is of kind `state`.
    ///
    /// Inside the effect you get the matched state, the intent, a
    /// [`Dispatch`] handle for follow-up intents (useful when several
    /// intents share behavior, like resetting or reloading) and an
    /// [`Emitter`] for new states.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateBinding`] if the pair is already
    /// bound.
    pub fn bind<F, Fut>(mut self, state: S::Kind, intent: I::Kind, effect: F) -> Result<Self, StoreError>
    where
        F: Fn(S, I, Dispatch<I>, Emitter<S>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.registry.register(state, intent, boxed_effect(effect))?;
        Ok(self)
    }

    /// Run effects on this runtime instead of the one current at `build()`.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Attach a store configuration (name, logging switches).
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Finalize into a [`Store`].
    ///
    /// # Errors
    /// - [`StoreError::MissingInitialState`] if `start_with` was never called
    /// - [`StoreError::NoRuntime`] if no runtime was given and none is current
    pub fn build(self) -> Result<Store<S, I>, StoreError> {
        let initial = self.initial.ok_or(StoreError::MissingInitialState)?;
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| StoreError::NoRuntime)?,
        };

        tracing::info!(
            store = %self.config.name,
            bindings = self.registry.len(),
            initial = ?initial.kind(),
            "Store built"
        );

        Ok(Store::new(initial, self.registry, runtime, self.config))
    }
}

impl<S: State, I: Intent> Store<S, I> {
    /// Start configuring a store.
    pub fn builder() -> StoreBuilder<S, I> {
        StoreBuilder::new()
    }

    /// Declarative entry point: run `configuration` on a fresh builder and
    /// build the result.
    ///
    /// ```ignore
    /// let store = Store::configure(|b| {
    ///     b.start_with(Screen::Idle)
    ///         .bind(ScreenKind::Idle, ActionKind::Load, load)?
    ///         .bind(ScreenKind::Loaded, ActionKind::Refresh, load)
    /// })?;
    /// ```
    pub fn configure<F>(configuration: F) -> Result<Self, StoreError>
    where
        F: FnOnce(StoreBuilder<S, I>) -> Result<StoreBuilder<S, I>, StoreError>,
    {
        configuration(StoreBuilder::new())?.build()
    }
}
