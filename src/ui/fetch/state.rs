use crate::api::{Post, UserProfile};
use crate::ui::mvi::UiState;

use super::intent::RequestId;

/// The three mutually exclusive render states of a fetched slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Empty,
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

/// Payloads that can arrive "successfully empty", e.g. an empty list.
pub trait FetchData {
    fn is_empty_payload(&self) -> bool {
        false
    }
}

impl<T> FetchData for Vec<T> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl FetchData for Post {}

impl FetchData for UserProfile {}

/// One remote resource owned by a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<T> {
    pub state: FetchState<T>,
    /// Raised by a manual refresh; independent of `Loading`.
    pub refreshing: bool,
    /// Request whose completion the slot is waiting for.
    pub pending: Option<RequestId>,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Loading,
            refreshing: false,
            pending: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchSlot<T> {}

impl<T> FetchSlot<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// A refresh may start only once nothing is in flight.
    pub fn can_refresh(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading_with_nothing_pending() {
        let slot: FetchSlot<Vec<u8>> = FetchSlot::default();
        assert!(slot.is_loading());
        assert!(!slot.refreshing);
        assert!(slot.pending.is_none());
        assert!(slot.data().is_none());
    }

    #[test]
    fn empty_vec_is_empty_payload() {
        assert!(Vec::<u8>::new().is_empty_payload());
        assert!(!vec![1u8].is_empty_payload());
    }
}
