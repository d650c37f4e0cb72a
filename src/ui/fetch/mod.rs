//! Fetch-state lifecycle shared by every data-bearing screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `FetchSlot` holding `Loading | Empty | Ready(data)`
//! - `intent.rs` - Start, Skip, Refresh, Succeeded, Failed
//! - `reducer.rs` - Transitions; stale completions are dropped by request id

mod intent;
mod reducer;
mod state;

pub use intent::{FetchIntent, RequestId};
pub use reducer::FetchReducer;
pub use state::{FetchData, FetchSlot, FetchState};
