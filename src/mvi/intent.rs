//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button clicks, key presses)
/// - System events (API responses, timers)
/// - Follow-up actions dispatched from a running effect
///
/// Intents are matched together with the current state to pick an effect.
pub trait Intent: Debug + Send + 'static {
    /// Field-less tag for each variant of the intent.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the variant tag of this intent.
    fn kind(&self) -> Self::Kind;
}
