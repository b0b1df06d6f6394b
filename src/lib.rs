//! Minimal unidirectional state store.
//!
//! A [`Store`] holds one immutable current state. Intents are dispatched
//! to it; each intent is matched together with the current state's kind
//! against the effects bound at build time, and the matching effect runs
//! asynchronously, committing the states it emits.

pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;

pub use config::{ConfigError, StoreConfig};
pub use error::StoreError;
pub use mvi::{Dispatch, Emitter, Intent, State, StateStream, Store, StoreBuilder};
