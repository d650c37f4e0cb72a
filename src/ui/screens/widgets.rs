use std::ops::Range;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{
    BODY_TEXT, KOFU_ORANGE, MUTED_TEXT, TAG_BG, TAG_FG, USERNAME_TEXT,
};
use crate::view::cards::SUMMARY_LINES;
use crate::view::labels::AUTHOR_PREFIX;
use crate::view::{wrap_truncated, PostCard};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Values every screen needs while drawing.
pub struct DrawContext<'a> {
    pub tick: usize,
    pub avatar_placeholder: &'a str,
    pub base_url: &'a str,
}

impl DrawContext<'_> {
    pub fn spinner(&self) -> &'static str {
        SPINNER[self.tick % SPINNER.len()]
    }
}

/// Single message centered in `area`.
pub fn draw_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let target = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

pub fn loading_line(ctx: &DrawContext<'_>, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", ctx.spinner()), Style::default().fg(KOFU_ORANGE)),
        Span::styled(text.to_string(), Style::default().fg(MUTED_TEXT)),
    ])
}

pub fn muted(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(MUTED_TEXT)))
}

pub fn section_title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(KOFU_ORANGE).add_modifier(Modifier::BOLD),
    ))
}

pub fn image_line(url: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("🖼  {}", url),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    ))
}

pub fn tag_chip(tag: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", tag),
        Style::default().bg(TAG_BG).fg(TAG_FG).add_modifier(Modifier::BOLD),
    )
}

pub fn author_spans(username: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{} ", AUTHOR_PREFIX), Style::default().fg(MUTED_TEXT)),
        Span::styled(
            username.to_string(),
            Style::default().fg(USERNAME_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]
}

fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▌ ", Style::default().fg(KOFU_ORANGE))
    } else {
        Span::raw("  ")
    }
}

/// Lines of one post card, each prefixed with the selection marker.
pub fn post_card_lines(card: &PostCard, width: u16, selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !card.cover.is_empty() {
        lines.push(image_line(&card.cover));
    }

    let mut meta = Vec::new();
    if let Some(author) = &card.author {
        meta.extend(author_spans(author));
        if !card.date.is_empty() {
            meta.push(Span::styled("  ·  ", Style::default().fg(MUTED_TEXT)));
        }
    }
    if !card.date.is_empty() {
        meta.push(Span::styled(card.date.clone(), Style::default().fg(MUTED_TEXT)));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }

    if !card.tag.is_empty() {
        lines.push(Line::from(tag_chip(&card.tag)));
    }

    lines.push(Line::from(Span::styled(
        card.title.clone(),
        Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
    )));

    let summary_width = width.saturating_sub(4) as usize;
    for line in wrap_truncated(&card.summary, summary_width, SUMMARY_LINES) {
        lines.push(Line::from(Span::styled(line, Style::default().fg(BODY_TEXT))));
    }

    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![marker(selected)];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .chain(std::iter::once(Line::default()))
        .collect()
}

/// Appends cards to `lines` and returns the line range of the selected one.
pub fn push_cards(
    lines: &mut Vec<Line<'static>>,
    cards: &[PostCard],
    width: u16,
    selected: Option<usize>,
) -> Option<Range<usize>> {
    let mut selected_range = None;
    for (index, card) in cards.iter().enumerate() {
        let is_selected = selected == Some(index);
        let start = lines.len();
        lines.extend(post_card_lines(card, width, is_selected));
        if is_selected {
            selected_range = Some(start..lines.len());
        }
    }
    selected_range
}

/// Scroll offset keeping `range` inside a viewport of `height` lines.
pub fn scroll_into_view(range: &Range<usize>, height: u16) -> u16 {
    let offset = range
        .end
        .saturating_sub(height as usize)
        .min(range.start);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Moves a selection index by `delta` within `len` items.
pub fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clamps_to_bounds() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(2, 5, 3), 2);
        assert_eq!(step(4, 1, 0), 0);
    }

    #[test]
    fn scroll_keeps_selected_range_visible() {
        assert_eq!(scroll_into_view(&(0..5), 10), 0);
        assert_eq!(scroll_into_view(&(8..14), 10), 4);
        // Taller than the viewport: the top of the card wins.
        assert_eq!(scroll_into_view(&(3..20), 10), 3);
    }
}
