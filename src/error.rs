//! Error types for store configuration.
//!
//! All of these surface while a store is being built. Once `build()`
//! succeeds, nothing on the store's surface returns an error: unmatched
//! dispatches are ignored and failures inside an effect stay with the
//! task that ran it.

use thiserror::Error;

/// Errors that can occur while configuring a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An effect is already bound to this (state kind, intent kind) pair.
    #[error(
        "Store already contains an effect for state {state} and intent {intent}. Check your store builder definitions"
    )]
    DuplicateBinding { state: String, intent: String },

    /// `build()` was called before `start_with`.
    #[error("Store configuration needs an initial state, provide it using `start_with`")]
    MissingInitialState,

    /// No runtime was given and none is running on the building thread.
    #[error("No tokio runtime available to run effects, build inside a runtime or pass one with `runtime`")]
    NoRuntime,
}

impl StoreError {
    pub(crate) fn duplicate_binding(state: impl std::fmt::Debug, intent: impl std::fmt::Debug) -> Self {
        StoreError::DuplicateBinding {
            state: format!("{:?}", state),
            intent: format!("{:?}", intent),
        }
    }
}
