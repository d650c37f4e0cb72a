//! Shared test utilities and fake services.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use kofu_reader::api::{
    ApiError, Comment, ContentService, Post, PostId, UserProfile, Username,
};
use kofu_reader::config::Config;
use kofu_reader::ui::app::App;
use kofu_reader::ui::events::AppEvent;
use kofu_reader::ui::fetcher::Fetcher;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Find a port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn post_json(id: &str, author: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": format!("Başlık {id}"),
        "summary": "Kısa bir özet",
        "cover": format!("https://img.test/{id}.jpg"),
        "content": "<h2>Giriş</h2><p>Merhaba <b>dünya</b></p>",
        "PostTags": "Rust",
        "createdAt": "2024-03-05T00:00:00Z",
        "author": { "username": author, "profilePhoto": "https://img.test/avatar.png" }
    })
}

pub fn post(id: &str, author: &str) -> Post {
    serde_json::from_value(post_json(id, author)).expect("valid post fixture")
}

pub fn comment(id: &str, author: Option<&str>) -> Comment {
    serde_json::from_value(serde_json::json!({
        "_id": id,
        "content": format!("Yorum {id}"),
        "createdAt": "2024-03-05T00:00:00Z",
        "author": author.map(|name| serde_json::json!({ "username": name }))
    }))
    .expect("valid comment fixture")
}

pub fn profile(username: &str, tags: &[&str], posts: Vec<Post>) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "user": {
            "username": username,
            "email": format!("{username}@kofu.test"),
            "bio": "Yazılımcı",
            "profilePhoto": "https://img.test/me.png",
            "tags": tags
        },
        "posts": posts
    }))
    .expect("valid profile fixture")
}

pub fn server_error() -> ApiError {
    ApiError::Status {
        url: "http://stub.test".to_string(),
        status: 500,
    }
}

// -- Stub service -------------------------------------------------------------

/// Calls received by [`StubService`], by endpoint.
#[derive(Debug, Default)]
pub struct CallLog {
    pub home_posts: AtomicUsize,
    pub post: AtomicUsize,
    pub comments: AtomicUsize,
    pub profile: AtomicUsize,
}

impl CallLog {
    pub fn total(&self) -> usize {
        self.home_posts.load(Ordering::SeqCst)
            + self.post.load(Ordering::SeqCst)
            + self.comments.load(Ordering::SeqCst)
            + self.profile.load(Ordering::SeqCst)
    }
}

/// In-memory [`ContentService`]. Unset endpoints fail with HTTP 500.
#[derive(Default)]
pub struct StubService {
    pub calls: Arc<CallLog>,
    pub posts: Option<Vec<Post>>,
    pub post: Option<Post>,
    pub comments: Option<Vec<Comment>>,
    pub profile: Option<UserProfile>,
    pub delay: Duration,
    /// Extra wait on the comments endpoint only.
    pub comments_delay: Duration,
}

impl StubService {
    async fn respond<T: Clone>(&self, value: &Option<T>) -> Result<T, ApiError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        value.clone().ok_or_else(server_error)
    }
}

#[async_trait]
impl ContentService for StubService {
    async fn home_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.calls.home_posts.fetch_add(1, Ordering::SeqCst);
        self.respond(&self.posts).await
    }

    async fn post(&self, _id: &PostId) -> Result<Post, ApiError> {
        self.calls.post.fetch_add(1, Ordering::SeqCst);
        self.respond(&self.post).await
    }

    async fn comments(&self, _id: &PostId) -> Result<Vec<Comment>, ApiError> {
        self.calls.comments.fetch_add(1, Ordering::SeqCst);
        if !self.comments_delay.is_zero() {
            tokio::time::sleep(self.comments_delay).await;
        }
        self.respond(&self.comments).await
    }

    async fn profile(&self, _username: &Username) -> Result<UserProfile, ApiError> {
        self.calls.profile.fetch_add(1, Ordering::SeqCst);
        self.respond(&self.profile).await
    }
}

// -- App helpers --------------------------------------------------------------

/// App wired to a stub service, with the event channel kept by the test.
pub struct TestApp {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub calls: Arc<CallLog>,
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl TestApp {
    /// Builds and starts the app. Must be called from a tokio runtime.
    pub fn start(service: StubService) -> Self {
        let calls = Arc::clone(&service.calls);
        let (tx, rx) = mpsc::channel();
        let fetcher = Fetcher::new(tokio::runtime::Handle::current(), Arc::new(service), tx);
        let mut app = App::new(Config::default(), fetcher);

        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        app.set_link_opener(Arc::new(move |url: &str| {
            sink.lock().unwrap().push(url.to_string());
            Ok::<(), std::io::Error>(())
        }));

        app.start();
        Self {
            app,
            events: rx,
            calls,
            opened,
        }
    }

    /// Feeds fetch completions to the app until `count` arrived.
    pub fn settle(&mut self, count: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = 0;
        while seen < count {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let event = tokio::task::block_in_place(|| self.events.recv_timeout(remaining))
                .expect("fetch completion did not arrive in time");
            if let AppEvent::Fetched(outcome) = event {
                self.app.on_fetched(outcome);
                seen += 1;
            }
        }
    }

    /// Asserts nothing else arrives within `wait`.
    pub fn assert_quiet(&mut self, wait: Duration) {
        let event = tokio::task::block_in_place(|| self.events.recv_timeout(wait));
        assert!(event.is_err(), "unexpected event: {:?}", event);
    }
}
