//! Model-View-Intent (MVI) primitives for the profile screen.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions, store updates, clock ticks
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
