use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::nav::Tab;
use crate::ui::screens::settings;
use crate::ui::theme::{BODY_TEXT, POPUP_BORDER, STATUS_ERROR};
use std::borrow::Cow;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SETTINGS_HINTS: &str = "1 ana sayfa · Tab sekme · q çık";
const ALERT_HINT: &str = "Enter: Tamam";
const ALERT_MAX_WIDTH: u16 = 56;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let ctx = app.draw_context();

    let title = app.active_route().map_or("", |route| route.title());
    frame.render_widget(Header::new(title, app.tab()).widget(), header);

    frame.render_widget(Clear, body);
    let inner = Rect {
        x: body.x.saturating_add(1),
        width: body.width.saturating_sub(2),
        ..body
    };
    let hints = match (app.tab(), app.active_screen()) {
        (Tab::Home, Some(screen)) => {
            screen.draw(frame, inner, &ctx);
            screen.hints()
        }
        _ => {
            settings::draw(frame, inner, &ctx);
            Cow::Borrowed(SETTINGS_HINTS)
        }
    };
    frame.render_widget(Footer::new(&hints).widget(footer), footer);

    if let Some(alert) = app.alert() {
        let text_width = ALERT_MAX_WIDTH.saturating_sub(4);
        let message_rows = (alert.message.chars().count() as u16).div_ceil(text_width.max(1));
        let height = message_rows + 4;
        let popup = centered_rect_by_size(area, ALERT_MAX_WIDTH, height);

        let lines = vec![
            Line::from(Span::styled(alert.message, Style::default().fg(BODY_TEXT))),
            Line::default(),
            Line::from(Span::styled(
                ALERT_HINT,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", alert.title),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block),
            popup,
        );
    }
}
