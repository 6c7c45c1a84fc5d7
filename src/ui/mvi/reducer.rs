//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state slice changes.
///
/// Reducers are pure: anything time-dependent receives `now` inside the
/// intent instead of reading a clock.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
