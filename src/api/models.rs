//! Records returned by the blog API.
//!
//! Field names follow the wire format (`_id`, `createdAt`, `PostTags`).
//! Everything the client can live without is defaulted so that a sparse
//! record still renders.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier of a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Username, the key used to fetch a profile.
///
/// Never empty: construction goes through [`Username::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a wire timestamp. RFC 3339 first, then a zone-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// A bad or missing date only costs the record its date, never the list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_timestamp))
}

/// Author summary embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    #[serde(default)]
    pub username: String,
    #[serde(rename = "profilePhoto", default)]
    pub profile_photo: Option<String>,
}

impl AuthorRef {
    pub fn username(&self) -> Option<Username> {
        Username::parse(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    #[serde(rename = "PostTags", default)]
    pub tag: String,
    /// `None` when the record carries no usable timestamp.
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

impl Post {
    pub fn author_username(&self) -> Option<Username> {
        self.author.as_ref().and_then(AuthorRef::username)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    /// `None` when the record carries no usable timestamp.
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

impl Comment {
    pub fn author_username(&self) -> Option<Username> {
        self.author.as_ref().and_then(AuthorRef::username)
    }
}

/// Public account data of a profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "profilePhoto", default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProfileUser {
    pub fn is_admin(&self) -> bool {
        self.tags.iter().any(|tag| tag == "admin")
    }
}

/// Response of `GET /profile/{username}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user: Option<ProfileUser>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_wire_names() {
        let json = r#"{
            "_id": "p1",
            "title": "Merhaba",
            "summary": "Kısa",
            "cover": "https://img/1.png",
            "content": "<p>Selam</p>",
            "PostTags": "Rust",
            "createdAt": "2024-03-05T00:00:00Z",
            "author": {"username": "ayse", "profilePhoto": "https://img/a.png"}
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_str(), "p1");
        assert_eq!(post.tag, "Rust");
        assert_eq!(post.author_username().unwrap().as_str(), "ayse");
    }

    #[test]
    fn sparse_post_defaults_optional_fields() {
        let json = r#"{"_id": "p2", "createdAt": "2024-03-05T10:00:00.123Z"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.title.is_empty());
        assert!(post.author.is_none());
    }

    #[test]
    fn undated_post_does_not_fail_the_list() {
        let json = r#"[
            {"_id": "p1", "createdAt": "2024-03-05T00:00:00Z"},
            {"_id": "p2"},
            {"_id": "p3", "createdAt": "dün"},
            {"_id": "p4", "createdAt": null},
            {"_id": "p5", "createdAt": 1709596800}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 5);
        assert!(posts[0].created_at.is_some());
        assert!(posts[1..].iter().all(|post| post.created_at.is_none()));
    }

    #[test]
    fn zoneless_timestamp_is_read_as_utc() {
        let json = r#"[{"_id": "c1", "createdAt": "2024-03-05T00:00:00"}, {"_id": "c2"}]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();
        assert_eq!(
            comments[0].created_at,
            parse_timestamp("2024-03-05T00:00:00Z")
        );
        assert!(comments[1].created_at.is_none());
    }

    #[test]
    fn blank_username_is_absent() {
        let author = AuthorRef {
            username: "  ".to_string(),
            profile_photo: None,
        };
        assert!(author.username().is_none());
    }

    #[test]
    fn profile_without_tags_or_posts() {
        let json = r#"{"user": {"username": "mehmet"}}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let user = profile.user.unwrap();
        assert!(user.tags.is_empty());
        assert!(!user.is_admin());
        assert!(profile.posts.is_empty());
    }
}
