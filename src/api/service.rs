use async_trait::async_trait;

use super::error::ApiError;
use super::models::{Comment, Post, PostId, UserProfile, Username};

/// Read-only access to the blog content.
///
/// The HTTP client implements this for the real API; tests substitute
/// in-memory services.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// `GET /homePosts`
    async fn home_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `GET /post/{id}`
    async fn post(&self, id: &PostId) -> Result<Post, ApiError>;

    /// `GET /post/{id}/comments`
    async fn comments(&self, id: &PostId) -> Result<Vec<Comment>, ApiError>;

    /// `GET /profile/{username}`
    async fn profile(&self, username: &Username) -> Result<UserProfile, ApiError>;
}

/// Remote resource a fetch targets. Drives the alert text and log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    HomePosts,
    Post,
    Comments,
    Profile,
}

impl Resource {
    /// Static message shown to the user when the fetch fails.
    pub fn alert_message(self) -> &'static str {
        match self {
            Resource::HomePosts => "Blog postları yüklenirken bir hata oluştu.",
            Resource::Post => "Blog detayı yüklenirken bir hata oluştu.",
            Resource::Comments => "Yorumlar yüklenirken bir hata oluştu.",
            Resource::Profile => "Kullanıcı verileri yüklenirken bir hata oluştu.",
        }
    }

    pub fn log_context(self) -> &'static str {
        match self {
            Resource::HomePosts => "Blog postları alınırken hata",
            Resource::Post => "Blog detayı alınırken hata",
            Resource::Comments => "Yorumlar alınırken hata",
            Resource::Profile => "Kullanıcı verileri alınırken hata",
        }
    }
}
