use crate::ui::app::App;
use crate::ui::nav::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    // Alerts are modal
    if app.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    if app.link_pick_active() {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                app.link_pick_digit(ch.to_digit(10).unwrap_or_default())
            }
            KeyCode::Enter => app.confirm_link_pick(),
            _ => app.cancel_link_pick(),
        }
        return;
    }

    match key.code {
        KeyCode::Char('1') => app.select_tab(Tab::Home),
        KeyCode::Char('2') => app.select_tab(Tab::Settings),
        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.scroll(-PAGE),
        KeyCode::PageDown => app.scroll(PAGE),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('a') => app.open_selected_author(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('y') | KeyCode::Char('b') => app.open_external_site(),
        KeyCode::Char('o') => app.open_image(),
        KeyCode::Char('l') => app.begin_link_pick(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
