//! Navigation shell: two tabs, the Home tab holding a stack of frames.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `route.rs` - Typed route parameters, normalized at the push boundary
//! - `state.rs` - Active tab and the Home stack
//! - `intent.rs` - SelectTab, NextTab, Push, Pop
//! - `reducer.rs` - Stack transitions (pure, no side effects)

mod intent;
mod reducer;
mod route;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use route::Route;
pub use state::{Frame, FrameId, NavState, Tab};
