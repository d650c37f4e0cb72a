use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::models::{Comment, Post, PostId, UserProfile, Username};
use super::service::ContentService;

const USER_AGENT: &str = concat!("kofu-reader/", env!("CARGO_PKG_VERSION"));

/// [`ContentService`] backed by the blog's HTTP JSON API.
pub struct HttpContentService {
    client: Client,
    base_url: Url,
}

impl HttpContentService {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry path segments".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let url_str = url.to_string();
        tracing::debug!(url = %url_str, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(&url_str, e))?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url_str,
            source: e,
        })
    }
}

#[async_trait]
impl ContentService for HttpContentService {
    async fn home_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.endpoint(&["homePosts"])?;
        self.get_json(url).await
    }

    async fn post(&self, id: &PostId) -> Result<Post, ApiError> {
        let url = self.endpoint(&["post", id.as_str()])?;
        self.get_json(url).await
    }

    async fn comments(&self, id: &PostId) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint(&["post", id.as_str(), "comments"])?;
        self.get_json(url).await
    }

    async fn profile(&self, username: &Username) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&["profile", username.as_str()])?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base: &str) -> HttpContentService {
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        HttpContentService::new(&config).unwrap()
    }

    #[test]
    fn endpoint_appends_segments() {
        let svc = service("https://blog.example.com");
        let url = svc.endpoint(&["post", "abc", "comments"]).unwrap();
        assert_eq!(url.as_str(), "https://blog.example.com/post/abc/comments");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let svc = service("https://example.com/api/");
        let url = svc.endpoint(&["homePosts"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/homePosts");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let svc = service("https://example.com");
        let url = svc.endpoint(&["profile", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/profile/a%20b%2Fc");
    }

    #[test]
    fn rejects_unparseable_base() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            HttpContentService::new(&config),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
