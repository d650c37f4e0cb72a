use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::theme::{BODY_TEXT, KOFU_ORANGE};
use crate::view::labels::{SETTINGS_DESCRIPTION, SETTINGS_SUBTITLE, TAB_SETTINGS};

use super::widgets::{draw_centered, muted, DrawContext};

/// Static placeholder tab.
pub fn draw(frame: &mut Frame<'_>, area: Rect, ctx: &DrawContext<'_>) {
    let lines = vec![
        Line::from(Span::styled(
            TAB_SETTINGS,
            Style::default().fg(KOFU_ORANGE).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(SETTINGS_SUBTITLE, Style::default().fg(BODY_TEXT))),
        muted(SETTINGS_DESCRIPTION),
        Line::default(),
        muted(format!("API: {}", ctx.base_url)),
    ];
    draw_centered(frame, area, lines);
}
