use crate::api::{AuthorRef, PostId, Username};
use crate::view::labels::APP_TITLE;

/// Screens of the Home stack with their parameters.
///
/// Screens always receive a stable identifier and fetch the record
/// themselves; embedded objects are never passed along as authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    PostList,
    PostDetail { post_id: PostId },
    /// `None` renders the unavailable placeholder without fetching.
    Profile { username: Option<Username> },
}

impl Route {
    pub fn post_detail(post_id: PostId) -> Self {
        Route::PostDetail { post_id }
    }

    pub fn profile(username: Option<Username>) -> Self {
        Route::Profile { username }
    }

    /// Reduces an embedded author to its username.
    pub fn profile_of(author: Option<&AuthorRef>) -> Self {
        Route::Profile {
            username: author.and_then(AuthorRef::username),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::PostList => APP_TITLE,
            Route::PostDetail { .. } | Route::Profile { .. } => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_of_missing_author_has_no_username() {
        assert_eq!(Route::profile_of(None), Route::Profile { username: None });
    }

    #[test]
    fn profile_of_blank_username_has_no_username() {
        let author = AuthorRef {
            username: String::new(),
            profile_photo: Some("https://img/a.png".to_string()),
        };
        assert_eq!(
            Route::profile_of(Some(&author)),
            Route::Profile { username: None }
        );
    }

    #[test]
    fn profile_of_author_keeps_only_username() {
        let author = AuthorRef {
            username: "ayse".to_string(),
            profile_photo: None,
        };
        assert_eq!(
            Route::profile_of(Some(&author)),
            Route::Profile {
                username: Username::parse("ayse")
            }
        );
    }
}
