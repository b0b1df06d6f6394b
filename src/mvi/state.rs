//! Base trait for store state in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for state objects held by a [`Store`](super::Store).
///
/// States should be:
/// - Immutable (Clone to hand out snapshots)
/// - Self-contained (all data observers need)
/// - Tagged by a [`Kind`](State::Kind) identifying the variant
///
/// The kind is one half of the key effects are bound to, so it has to
/// distinguish variants and nothing else: `Loaded(a)` and `Loaded(b)`
/// share a kind.
pub trait State: Clone + Debug + Send + Sync + 'static {
    /// Field-less tag for each variant of the state.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the variant tag of this state.
    fn kind(&self) -> Self::Kind;
}
