//! Presentation mapping: fetched records to cards, rich text and dates.
//!
//! Nothing here touches the terminal; screens in `ui::screens` draw the
//! values produced by this module.

pub mod cards;
pub mod date;
pub mod html;
pub mod labels;

pub use cards::{
    bio_text, comment_card, post_card, post_cards, profile_card, tag_line, wrap_truncated,
    CommentCard, PostCard, ProfileCard, TagLine, TagVariant,
};
pub use date::{long_date, numeric_date};
pub use html::{render_html, RichText};
