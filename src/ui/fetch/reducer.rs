use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchData, FetchSlot, FetchState};

/// Reducer for a single fetched slot.
///
/// `Loading` is left exactly once per request, on success and on failure.
/// Completions for any request other than the pending one are ignored.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T> Reducer for FetchReducer<T>
where
    T: FetchData + Clone + PartialEq + Send + 'static,
{
    type State = FetchSlot<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start { request } => FetchSlot {
                state: FetchState::Loading,
                refreshing: false,
                pending: Some(request),
            },

            FetchIntent::Skip => FetchSlot {
                state: FetchState::Empty,
                refreshing: false,
                pending: None,
            },

            FetchIntent::Refresh { request } => {
                if !state.can_refresh() {
                    return state;
                }
                FetchSlot {
                    refreshing: true,
                    pending: Some(request),
                    ..state
                }
            }

            FetchIntent::Succeeded { request, data } => {
                if state.pending != Some(request) {
                    return state;
                }
                let next = if data.is_empty_payload() {
                    FetchState::Empty
                } else {
                    FetchState::Ready(data)
                };
                FetchSlot {
                    state: next,
                    refreshing: false,
                    pending: None,
                }
            }

            FetchIntent::Failed { request } => {
                if state.pending != Some(request) {
                    return state;
                }
                // Previously loaded data survives a failed refresh.
                let next = match state.state {
                    FetchState::Loading => FetchState::Empty,
                    other => other,
                };
                FetchSlot {
                    state: next,
                    refreshing: false,
                    pending: None,
                }
            }
        }
    }
}
