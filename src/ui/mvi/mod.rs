//! Model-View-Intent primitives shared by the invitation's state slices.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: a plain value describing one slice of the screen
//! - **Intent**: a key press, a tick or a submission outcome
//! - **Reducer**: `(State, Intent) -> State`, with no side effects
//!
//! Side effects (confetti, HTTP, timers firing) live in `App`, which feeds
//! their results back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
