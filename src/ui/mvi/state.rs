/// Marker trait for UI state.
///
/// `Default` is required so a field can be taken with `std::mem::take`
/// while its reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
