//! Model-View-Intent (MVI) store primitives.
//!
//! This module provides a unidirectional state container whose state
//! transitions are produced by asynchronous effects.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ (state kind, intent kind) ──→ Effect ──→ emit(State) ──→ observers
//!    ↑                                       │
//!    └──────────── Dispatch ─────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot held by the store
//! - **Intent**: User actions or system events
//! - **Effect**: Async function bound to one (state kind, intent kind) pair,
//!   emitting zero or more successor states

mod builder;
mod effect;
mod holder;
mod intent;
mod registry;
mod state;
mod store;

pub use builder::StoreBuilder;
pub use effect::{boxed_effect, Dispatch, EffectFn, EffectFuture, Emitter};
pub use holder::{StateHolder, StateStream};
pub use intent::Intent;
pub use registry::{BindingKey, EffectRegistry, KeyOf};
pub use state::State;
pub use store::Store;
