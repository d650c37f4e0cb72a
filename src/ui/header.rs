use crate::ui::nav::Tab;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, KOFU_ORANGE};
use crate::view::labels::{TAB_HOME, TAB_SETTINGS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the tab switcher.
pub struct Header<'a> {
    title: &'a str,
    tab: Tab,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, tab: Tab) -> Self {
        Self { title, tab }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(KOFU_ORANGE)
            .add_modifier(Modifier::BOLD);

        let tab_style = |tab: Tab| {
            if tab == self.tab {
                Style::default().fg(KOFU_ORANGE).add_modifier(Modifier::BOLD)
            } else {
                text_style.add_modifier(Modifier::DIM)
            }
        };

        let mut spans = vec![Span::styled("  ", text_style)];
        if !self.title.is_empty() {
            spans.push(Span::styled(self.title.to_string(), title_style));
            spans.push(Span::styled("  │  ", separator_style));
        }
        spans.push(Span::styled(format!("1 {}", TAB_HOME), tab_style(Tab::Home)));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            format!("2 {}", TAB_SETTINGS),
            tab_style(Tab::Settings),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
