use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::{Frame, FrameId, NavState, Tab};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::SelectTab(tab) => NavState { tab, ..state },
            NavIntent::NextTab => NavState {
                tab: state.tab.next(),
                ..state
            },
            NavIntent::Push(route) => {
                let mut stack = state.stack;
                stack.push(Frame {
                    id: FrameId(state.next_id),
                    route,
                });
                NavState {
                    tab: Tab::Home,
                    stack,
                    next_id: state.next_id + 1,
                }
            }
            NavIntent::Pop => {
                if !state.can_pop() {
                    return state;
                }
                let mut stack = state.stack;
                stack.pop();
                NavState { stack, ..state }
            }
        }
    }
}
