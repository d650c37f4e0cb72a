/// Marker trait for intents: key presses, fetch completions, navigation.
pub trait Intent: Send + 'static {}
