//! Terminal front end: navigation shell, screens and the event loop.

pub mod alert;
pub mod app;
pub mod events;
pub mod fetch;
pub mod fetcher;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod tasks;
pub mod terminal_guard;
pub mod theme;
