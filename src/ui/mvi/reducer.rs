//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where screen state transitions happen.
/// It must be a pure function: (State, Intent) -> State. Time is passed in
/// through the intent, never read from the clock.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
