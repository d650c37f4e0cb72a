use crate::ui::mvi::Intent;

use super::route::Route;
use super::state::Tab;

#[derive(Debug, Clone)]
pub enum NavIntent {
    SelectTab(Tab),
    NextTab,
    /// Push onto the Home stack; brings the Home tab to front.
    Push(Route),
    /// Pop one frame; the root frame stays.
    Pop,
}

impl Intent for NavIntent {}
