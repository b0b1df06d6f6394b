//! Effect registry - maps (state kind, intent kind) pairs to effects.
//!
//! Bindings are one-shot: a key is registered once and never replaced or
//! removed. The registry is only mutated while a store is being built;
//! the store keeps it behind a shared reference afterwards.

use std::collections::HashMap;

use super::effect::EffectFn;
use super::intent::Intent;
use super::state::State;
use crate::error::StoreError;

/// Key an effect is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingKey<SK, IK> {
    pub state: SK,
    pub intent: IK,
}

impl<SK, IK> BindingKey<SK, IK> {
    pub fn new(state: SK, intent: IK) -> Self {
        Self { state, intent }
    }
}

/// Binding key for a concrete store's state and intent types.
pub type KeyOf<S, I> = BindingKey<<S as State>::Kind, <I as Intent>::Kind>;

/// Registry of effects, keyed by [`BindingKey`].
pub struct EffectRegistry<S: State, I: Intent> {
    effects: HashMap<KeyOf<S, I>, EffectFn<S, I>>,
}

impl<S: State, I: Intent> Default for EffectRegistry<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Intent> EffectRegistry<S, I> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            effects: HashMap::new(),
        }
    }

    /// Bind an effect to a (state kind, intent kind) pair.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateBinding`] if the pair is already
    /// bound. The existing binding is left untouched.
    pub fn register(
        &mut self,
        state: S::Kind,
        intent: I::Kind,
        effect: EffectFn<S, I>,
    ) -> Result<(), StoreError> {
        let key = BindingKey::new(state, intent);
        if self.effects.contains_key(&key) {
            return Err(StoreError::duplicate_binding(state, intent));
        }

        tracing::trace!(state = ?state, intent = ?intent, "Registered effect");
        self.effects.insert(key, effect);
        Ok(())
    }

    /// Find the effect bound to `key`, if any.
    pub fn lookup(&self, key: &KeyOf<S, I>) -> Option<&EffectFn<S, I>> {
        self.effects.get(key)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
