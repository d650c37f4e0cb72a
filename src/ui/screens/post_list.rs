use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::api::Post;
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::theme::{KOFU_ORANGE, MUTED_TEXT};
use crate::view::labels::{POSTS_EMPTY, POSTS_LOADING, REFRESHING};
use crate::view::post_cards;

use super::widgets::{
    draw_centered, loading_line, muted, push_cards, scroll_into_view, step, DrawContext,
};

/// Root of the Home stack: the feed of recent posts.
#[derive(Debug, Default)]
pub struct PostListScreen {
    pub posts: FetchSlot<Vec<Post>>,
    pub selected: usize,
}

impl PostListScreen {
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.data()?.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.posts.data().map_or(0, Vec::len);
        self.selected = step(self.selected, delta, len);
    }

    /// Keeps the selection valid after the list was replaced.
    pub fn clamp_selection(&mut self) {
        self.move_selection(0);
    }
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, screen: &PostListScreen, ctx: &DrawContext<'_>) {
    let mut block = Block::default();
    if screen.posts.refreshing {
        block = block.title(Line::from(vec![
            Span::styled(format!(" {} ", ctx.spinner()), Style::default().fg(KOFU_ORANGE)),
            Span::styled(
                REFRESHING,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &screen.posts.state {
        FetchState::Loading => draw_centered(frame, inner, vec![loading_line(ctx, POSTS_LOADING)]),
        FetchState::Empty => draw_centered(frame, inner, vec![muted(POSTS_EMPTY)]),
        FetchState::Ready(posts) => {
            let cards = post_cards(posts, true);
            let mut lines = Vec::new();
            let selected = push_cards(&mut lines, &cards, inner.width, Some(screen.selected));
            let offset = selected
                .map(|range| scroll_into_view(&range, inner.height))
                .unwrap_or(0);
            frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
        }
    }
}
