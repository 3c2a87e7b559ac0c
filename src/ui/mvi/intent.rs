//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Store updates (fetch results published on a watch slot)
/// - Clock ticks driving animations
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
