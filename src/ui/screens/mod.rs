//! Per-route screen state and drawing.

pub mod post_detail;
pub mod post_list;
pub mod profile;
pub mod settings;
mod widgets;

pub use post_detail::PostDetailScreen;
pub use post_list::PostListScreen;
pub use profile::ProfileScreen;
pub use widgets::DrawContext;

use std::borrow::Cow;

use ratatui::layout::Rect;
use ratatui::Frame;

/// State of one mounted frame of the Home stack.
#[derive(Debug)]
pub enum Screen {
    PostList(PostListScreen),
    PostDetail(PostDetailScreen),
    Profile(ProfileScreen),
}

impl Screen {
    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect, ctx: &DrawContext<'_>) {
        match self {
            Screen::PostList(screen) => post_list::draw(frame, area, screen, ctx),
            Screen::PostDetail(screen) => post_detail::draw(frame, area, screen, ctx),
            Screen::Profile(screen) => profile::draw(frame, area, screen, ctx),
        }
    }

    /// Key hints shown in the footer.
    pub fn hints(&self) -> Cow<'static, str> {
        match self {
            Screen::PostList(_) => {
                Cow::Borrowed("↑↓ seç · Enter aç · a yazar · r yenile · o görsel · q çık")
            }
            Screen::PostDetail(PostDetailScreen {
                link_pick: Some(typed),
                ..
            }) => {
                let typed = if *typed == 0 {
                    String::new()
                } else {
                    typed.to_string()
                };
                Cow::Owned(format!("Bağlantı no: {}_ · Enter aç · Esc iptal", typed))
            }
            Screen::PostDetail(_) => Cow::Borrowed(
                "↑↓ yorum · PgUp/PgDn kaydır · Enter profil · l<n> bağlantı · y yorum · b beğen · Esc geri",
            ),
            Screen::Profile(_) => Cow::Borrowed("↑↓ seç · Enter aç · o avatar · Esc geri"),
        }
    }
}
