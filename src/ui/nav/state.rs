use crate::ui::mvi::UiState;

use super::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Settings,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Settings,
            Tab::Settings => Tab::Home,
        }
    }
}

/// Identity of a pushed frame. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: FrameId,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub tab: Tab,
    /// Home stack; the post list root is always at index 0.
    pub stack: Vec<Frame>,
    pub next_id: u64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            tab: Tab::Home,
            stack: vec![Frame {
                id: FrameId(0),
                route: Route::PostList,
            }],
            next_id: 1,
        }
    }
}

impl UiState for NavState {}

impl NavState {
    /// Top of the Home stack.
    pub fn top(&self) -> Option<&Frame> {
        self.stack.last()
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.stack.iter().any(|frame| frame.id == id)
    }

    pub fn can_pop(&self) -> bool {
        self.tab == Tab::Home && self.stack.len() > 1
    }
}
