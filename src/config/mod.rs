//! Configuration for the reader: API endpoint, outbound links and UI timing.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LinksConfig, UiConfig};
