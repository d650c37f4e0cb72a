//! Terminal reader for the Kofu blog.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
pub mod view;
