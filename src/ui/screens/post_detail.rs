use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::{Comment, Post, PostId};
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::theme::{BODY_TEXT, COMMENT_ACTION, HEADING_TEXT, KOFU_ORANGE, LIKE_ACTION, MUTED_TEXT};
use crate::view::labels::{
    comments_heading, COMMENTS_LOADING, COMMENTS_TITLE, COMMENT_ACTION as COMMENT_LABEL, GO_BACK,
    LIKE_ACTION as LIKE_LABEL, NO_COMMENTS, POST_LOADING, POST_NOT_FOUND,
};
use crate::view::{comment_card, long_date, render_html, CommentCard};

use super::widgets::{
    author_spans, draw_centered, image_line, loading_line, muted, scroll_into_view, section_title,
    tag_chip, DrawContext,
};

/// A single post with its comment thread. Detail and comments load
/// independently.
#[derive(Debug)]
pub struct PostDetailScreen {
    pub post_id: PostId,
    pub post: FetchSlot<Post>,
    pub comments: FetchSlot<Vec<Comment>>,
    pub selected_comment: Option<usize>,
    pub scroll: u16,
    /// Number typed after `l`, while picking a body link.
    pub link_pick: Option<usize>,
}

impl PostDetailScreen {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            post: FetchSlot::default(),
            comments: FetchSlot::default(),
            selected_comment: None,
            scroll: 0,
            link_pick: None,
        }
    }

    /// Targets of the `[n]` markers in the post body.
    pub fn body_links(&self) -> Vec<String> {
        self.post
            .data()
            .map(|post| render_html(&post.content).links)
            .unwrap_or_default()
    }

    /// Starts picking a body link. No-op when the body has none.
    pub fn begin_link_pick(&mut self) {
        if !self.body_links().is_empty() {
            self.link_pick = Some(0);
        }
    }

    /// Appends a digit to the link number. Resolves as soon as no longer
    /// number could still name a link; an out-of-range number cancels.
    pub fn push_link_digit(&mut self, digit: u32) -> Option<String> {
        let typed = self.link_pick?;
        let links = self.body_links();
        let number = typed.saturating_mul(10).saturating_add(digit as usize);
        if number == 0 {
            return None;
        }
        if number > links.len() {
            self.link_pick = None;
            return None;
        }
        if number.saturating_mul(10) > links.len() {
            self.link_pick = None;
            return links.get(number - 1).cloned();
        }
        self.link_pick = Some(number);
        None
    }

    /// Resolves the number typed so far and leaves picking mode.
    pub fn confirm_link_pick(&mut self) -> Option<String> {
        let number = self.link_pick.take()?;
        number
            .checked_sub(1)
            .and_then(|index| self.body_links().get(index).cloned())
    }

    /// Zero until the comment list arrives.
    pub fn comment_count(&self) -> usize {
        self.comments.data().map_or(0, Vec::len)
    }

    pub fn selected_comment(&self) -> Option<&Comment> {
        let index = self.selected_comment?;
        self.comments.data()?.get(index)
    }

    /// Walks the comment selection; moving up past the first comment
    /// returns to free scrolling.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.comment_count();
        if count == 0 {
            self.selected_comment = None;
            return;
        }
        self.selected_comment = match self.selected_comment {
            None if delta > 0 => Some(0),
            None => None,
            Some(index) => index
                .checked_add_signed(delta)
                .map(|next| next.min(count - 1)),
        };
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.selected_comment = None;
        self.scroll = self.scroll.saturating_add_signed(delta.clamp(-1000, 1000) as i16);
    }
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, screen: &PostDetailScreen, ctx: &DrawContext<'_>) {
    let post = match &screen.post.state {
        FetchState::Loading => {
            draw_centered(frame, area, vec![loading_line(ctx, POST_LOADING)]);
            return;
        }
        FetchState::Empty => {
            draw_centered(
                frame,
                area,
                vec![
                    Line::from(Span::styled(POST_NOT_FOUND, Style::default().fg(BODY_TEXT))),
                    Line::default(),
                    muted(format!("Esc: {}", GO_BACK)),
                ],
            );
            return;
        }
        FetchState::Ready(post) => post,
    };

    let (lines, selected) = detail_lines(post, screen, ctx, area.width);
    let total = wrapped_rows(&lines, 0..lines.len(), area.width);
    let max_offset =
        u16::try_from(total.saturating_sub(area.height as usize)).unwrap_or(u16::MAX);
    let offset = match selected {
        Some(range) => {
            let start = wrapped_rows(&lines, 0..range.start, area.width);
            let end = start + wrapped_rows(&lines, range, area.width);
            scroll_into_view(&(start..end), area.height).min(max_offset)
        }
        None => screen.scroll.min(max_offset),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        area,
    );
}

fn detail_lines(
    post: &Post,
    screen: &PostDetailScreen,
    ctx: &DrawContext<'_>,
    width: u16,
) -> (Vec<Line<'static>>, Option<Range<usize>>) {
    let mut lines = Vec::new();
    if !post.cover.is_empty() {
        lines.push(image_line(&post.cover));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        post.title.clone(),
        Style::default().fg(HEADING_TEXT).add_modifier(Modifier::BOLD),
    )));

    let mut meta = author_spans(
        &post
            .author_username()
            .map(|name| name.to_string())
            .unwrap_or_default(),
    );
    if let Some(created_at) = &post.created_at {
        meta.push(Span::styled(
            format!("  ·  {}  ", long_date(created_at)),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    if !post.tag.is_empty() {
        meta.push(tag_chip(&post.tag));
    }
    lines.push(Line::from(meta));
    lines.push(Line::default());

    if !post.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            post.summary.clone(),
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }

    lines.extend(render_html(&post.content).lines);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "─".repeat(width.min(60) as usize),
        Style::default().fg(MUTED_TEXT),
    )));

    let mut selected = None;
    match &screen.comments.state {
        FetchState::Loading => {
            lines.push(section_title(COMMENTS_TITLE));
            lines.push(Line::default());
            lines.push(loading_line(ctx, COMMENTS_LOADING));
            lines.push(Line::default());
        }
        FetchState::Empty => {
            lines.push(section_title(&comments_heading(0)));
            lines.push(Line::default());
            lines.push(muted(NO_COMMENTS));
            lines.push(Line::default());
        }
        FetchState::Ready(comments) => {
            lines.push(section_title(&comments_heading(comments.len())));
            lines.push(Line::default());
            if comments.is_empty() {
                lines.push(muted(NO_COMMENTS));
                lines.push(Line::default());
            }
            for (index, comment) in comments.iter().enumerate() {
                let card = comment_card(comment, ctx.avatar_placeholder);
                let is_selected = screen.selected_comment == Some(index);
                let start = lines.len();
                lines.extend(comment_lines(&card, is_selected));
                if is_selected {
                    selected = Some(start..lines.len());
                }
            }
        }
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!(" y {} ", COMMENT_LABEL),
            Style::default().fg(COMMENT_ACTION).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!(" b {} ", LIKE_LABEL),
            Style::default().fg(LIKE_ACTION).add_modifier(Modifier::BOLD),
        ),
    ]));

    (lines, selected)
}

/// Estimated terminal rows taken by `lines[range]` once wrapped.
fn wrapped_rows(lines: &[Line<'_>], range: Range<usize>, width: u16) -> usize {
    let width = width.max(1) as usize;
    lines[range]
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

fn comment_lines(card: &CommentCard, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected {
        Span::styled("▌ ", Style::default().fg(KOFU_ORANGE))
    } else {
        Span::raw("  ")
    };

    let mut header = vec![marker.clone()];
    header.extend(author_spans(&card.author));
    if !card.date.is_empty() {
        header.push(Span::styled(
            format!("  ·  {}", card.date),
            Style::default().fg(MUTED_TEXT),
        ));
    }

    vec![
        Line::from(header),
        Line::from(vec![
            marker.clone(),
            Span::styled(format!("👤 {}", card.avatar), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(vec![
            marker,
            Span::styled(card.content.clone(), Style::default().fg(BODY_TEXT)),
        ]),
        Line::default(),
    ]
}
