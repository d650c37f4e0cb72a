//! Pure mapping from fetched records to what a screen shows.

use crate::api::{Comment, Post, PostId, ProfileUser, UserProfile, Username};

use super::date::{long_date, numeric_date};
use super::labels::{ANONYMOUS, NO_BIO};

/// Summary lines shown on a post card.
pub const SUMMARY_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub post_id: PostId,
    pub cover: String,
    /// `None` when the card is shown on the author's own profile.
    pub author: Option<String>,
    pub author_username: Option<Username>,
    pub date: String,
    pub tag: String,
    pub title: String,
    pub summary: String,
}

pub fn post_card(post: &Post, with_author: bool) -> PostCard {
    let author_username = post.author_username();
    let author = with_author.then(|| {
        author_username
            .as_ref()
            .map(|name| name.to_string())
            .unwrap_or_default()
    });

    PostCard {
        post_id: post.id.clone(),
        cover: post.cover.clone(),
        author,
        author_username,
        date: post.created_at.as_ref().map(long_date).unwrap_or_default(),
        tag: post.tag.clone(),
        title: post.title.clone(),
        summary: post.summary.clone(),
    }
}

pub fn post_cards(posts: &[Post], with_author: bool) -> Vec<PostCard> {
    posts.iter().map(|post| post_card(post, with_author)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentCard {
    pub avatar: String,
    pub author: String,
    pub author_username: Option<Username>,
    pub date: String,
    pub content: String,
}

pub fn comment_card(comment: &Comment, avatar_placeholder: &str) -> CommentCard {
    let author_username = comment.author_username();
    let avatar = comment
        .author
        .as_ref()
        .and_then(|author| author.profile_photo.clone())
        .filter(|photo| !photo.is_empty())
        .unwrap_or_else(|| avatar_placeholder.to_string());

    CommentCard {
        avatar,
        author: author_username
            .as_ref()
            .map(|name| name.to_string())
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        author_username,
        date: comment
            .created_at
            .as_ref()
            .map(numeric_date)
            .unwrap_or_default(),
        content: comment.content.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVariant {
    Admin,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub text: String,
    pub variant: TagVariant,
}

/// First two tags, uppercased; admin styling when any tag is `admin`.
pub fn tag_line(tags: &[String]) -> TagLine {
    let text = tags
        .iter()
        .take(2)
        .map(|tag| tag.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");
    let variant = if tags.iter().any(|tag| tag == "admin") {
        TagVariant::Admin
    } else {
        TagVariant::Plain
    };
    TagLine { text, variant }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub avatar: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub tags: TagLine,
}

/// `None` when the response carried no user record.
pub fn profile_card(profile: &UserProfile, requested: Option<&Username>) -> Option<ProfileCard> {
    let user = profile.user.as_ref()?;
    let username = Username::parse(&user.username)
        .or_else(|| requested.cloned())
        .map(|name| name.to_string())
        .unwrap_or_default();

    Some(ProfileCard {
        avatar: user.profile_photo.clone().filter(|photo| !photo.is_empty()),
        username,
        email: user.email.clone().filter(|email| !email.is_empty()),
        tags: tag_line(&user.tags),
    })
}

pub fn bio_text(user: Option<&ProfileUser>) -> &str {
    user.and_then(|user| user.bio.as_deref())
        .filter(|bio| !bio.trim().is_empty())
        .unwrap_or(NO_BIO)
}

/// Word-wraps `text` to `width` columns and keeps at most `max_lines`,
/// ending the last kept line with an ellipsis when text was cut.
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        let word: String = chars.into_iter().collect();
        let current_len = current.chars().count();
        if current_len == 0 {
            current = word;
        } else if current_len + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width.saturating_sub(1)).collect();
            *last = format!("{}…", kept.trim_end());
        }
    }

    lines
}
