use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::api::{Post, UserProfile, Username};
use crate::ui::fetch::{FetchSlot, FetchState};
use crate::ui::theme::{ADMIN_TAGS, BODY_TEXT, MUTED_TEXT, PLAIN_TAGS, USERNAME_TEXT};
use crate::view::labels::{
    ABOUT_TITLE, NO_POSTS, POSTS_TITLE, PROFILE_LOADING, PROFILE_TITLE, PROFILE_UNAVAILABLE,
};
use crate::view::{bio_text, post_cards, profile_card, ProfileCard, TagVariant};

use super::widgets::{
    draw_centered, image_line, loading_line, muted, push_cards, scroll_into_view, section_title,
    step, DrawContext,
};

/// A user's card, bio and posts. `username` is `None` when the route was
/// opened for an author without a name; nothing is fetched then.
#[derive(Debug)]
pub struct ProfileScreen {
    pub username: Option<Username>,
    pub profile: FetchSlot<UserProfile>,
    pub selected: usize,
}

impl ProfileScreen {
    pub fn new(username: Option<Username>) -> Self {
        Self {
            username,
            profile: FetchSlot::default(),
            selected: 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        self.profile
            .data()
            .map(|profile| profile.posts.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.posts().get(self.selected)
    }

    pub fn avatar(&self) -> Option<&str> {
        self.profile
            .data()?
            .user
            .as_ref()?
            .profile_photo
            .as_deref()
            .filter(|photo| !photo.is_empty())
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.posts().len());
    }
}

pub fn draw(frame: &mut Frame<'_>, area: Rect, screen: &ProfileScreen, ctx: &DrawContext<'_>) {
    let profile = match &screen.profile.state {
        FetchState::Loading => {
            draw_centered(frame, area, vec![loading_line(ctx, PROFILE_LOADING)]);
            return;
        }
        FetchState::Empty => None,
        FetchState::Ready(profile) => Some(profile),
    };

    let mut lines = vec![section_title(PROFILE_TITLE), Line::default()];

    match profile.and_then(|profile| profile_card(profile, screen.username.as_ref())) {
        Some(card) => lines.extend(card_lines(&card)),
        None => lines.push(muted(PROFILE_UNAVAILABLE)),
    }
    lines.push(Line::default());

    lines.push(section_title(ABOUT_TITLE));
    let user = profile.and_then(|profile| profile.user.as_ref());
    lines.push(Line::from(Span::styled(
        bio_text(user).to_string(),
        Style::default().fg(BODY_TEXT),
    )));
    lines.push(Line::default());

    lines.push(section_title(POSTS_TITLE));
    lines.push(Line::default());
    let cards = post_cards(screen.posts(), false);
    let selected = if cards.is_empty() {
        lines.push(muted(NO_POSTS));
        None
    } else {
        push_cards(&mut lines, &cards, area.width, Some(screen.selected))
    };

    let offset = selected
        .map(|range| scroll_into_view(&range, area.height))
        .unwrap_or(0);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn card_lines(card: &ProfileCard) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(avatar) = &card.avatar {
        lines.push(image_line(avatar));
    }
    lines.push(Line::from(Span::styled(
        card.username.clone(),
        Style::default().fg(USERNAME_TEXT).add_modifier(Modifier::BOLD),
    )));
    if let Some(email) = &card.email {
        lines.push(Line::from(Span::styled(
            email.clone(),
            Style::default().fg(MUTED_TEXT),
        )));
    }
    if !card.tags.text.is_empty() {
        let style = match card.tags.variant {
            TagVariant::Admin => Style::default().fg(ADMIN_TAGS).add_modifier(Modifier::BOLD),
            TagVariant::Plain => Style::default().fg(PLAIN_TAGS),
        };
        lines.push(Line::from(Span::styled(card.tags.text.clone(), style)));
    }
    lines
}
