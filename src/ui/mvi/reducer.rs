use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: (State, Intent) -> State.
///
/// Side effects such as spawning requests or raising alerts happen in the
/// caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
