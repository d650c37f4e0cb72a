//! HTTP client against a mock blog API.

mod common;

use common::mock_backend::{MockBlogApi, MockResponse};
use common::{free_port, post_json};
use kofu_reader::api::{ApiError, ContentService, HttpContentService, PostId, Username};
use kofu_reader::config::ApiConfig;

fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

fn service(backend: &MockBlogApi) -> HttpContentService {
    HttpContentService::new(&api_config(&backend.base_url())).expect("client builds")
}

#[tokio::test]
async fn home_posts_parses_list() {
    let backend = MockBlogApi::start().await;
    let body = serde_json::json!([post_json("p1", "ayse"), post_json("p2", "mehmet")]);
    backend.route("/homePosts", MockResponse::json(body.to_string()));

    let posts = service(&backend).home_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PostId::new("p1"));
    assert_eq!(posts[1].author_username().unwrap().as_str(), "mehmet");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/homePosts");
    assert!(requests[0]
        .header("user-agent")
        .is_some_and(|agent| agent.starts_with("kofu-reader/")));
}

#[tokio::test]
async fn post_and_comments_hit_nested_paths() {
    let backend = MockBlogApi::start().await;
    backend
        .route("/post/abc", MockResponse::json(post_json("abc", "ayse").to_string()))
        .route(
            "/post/abc/comments",
            MockResponse::json(
                r#"[{"_id": "c1", "content": "Güzel", "createdAt": "2024-03-05T10:00:00Z"}]"#,
            ),
        );

    let service = service(&backend);
    let id = PostId::new("abc");
    let post = service.post(&id).await.unwrap();
    let comments = service.comments(&id).await.unwrap();

    assert_eq!(post.title, "Başlık abc");
    assert_eq!(comments.len(), 1);
    assert!(comments[0].author.is_none());

    assert_eq!(backend.paths(), vec!["/post/abc", "/post/abc/comments"]);
}

#[tokio::test]
async fn profile_username_is_percent_encoded() {
    let backend = MockBlogApi::start().await;
    backend.route(
        "/profile/ay%C5%9Fe%20y%C4%B1lmaz",
        MockResponse::json(
            r#"{"user": {"username": "ayşe yılmaz", "tags": ["admin"]}, "posts": []}"#,
        ),
    );

    let username = Username::parse("ayşe yılmaz").unwrap();
    let profile = service(&backend).profile(&username).await.unwrap();

    assert!(profile.user.unwrap().is_admin());
    assert!(profile.posts.is_empty());
    assert_eq!(backend.paths(), vec!["/profile/ay%C5%9Fe%20y%C4%B1lmaz"]);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let backend = MockBlogApi::start().await;
    backend.route("/api/homePosts", MockResponse::json("[]"));

    let config = api_config(&format!("{}/api/", backend.base_url()));
    let service = HttpContentService::new(&config).unwrap();
    let posts = service.home_posts().await.unwrap();

    assert!(posts.is_empty());
    assert_eq!(backend.paths(), vec!["/api/homePosts"]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let backend = MockBlogApi::start().await;
    backend.route("/post/missing", MockResponse::error(404, "not found"));

    let err = service(&backend)
        .post(&PostId::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.error_type(), "http_status");
}

#[tokio::test]
async fn unknown_path_is_a_status_error() {
    let backend = MockBlogApi::start().await;

    let err = service(&backend)
        .comments(&PostId::new("yok"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(backend.paths(), vec!["/post/yok/comments"]);
}

#[tokio::test]
async fn one_undated_record_keeps_the_list() {
    let backend = MockBlogApi::start().await;
    backend.route(
        "/homePosts",
        MockResponse::json(
            r#"[{"_id": "p1", "createdAt": "2024-03-05T00:00:00Z"}, {"_id": "p2"}]"#,
        ),
    );

    let posts = service(&backend).home_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts[1].created_at.is_none());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let backend = MockBlogApi::start().await;
    backend.route("/homePosts", MockResponse::json(r#"{"unexpected": true}"#));

    let err = service(&backend).home_posts().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn slow_response_times_out() {
    let backend = MockBlogApi::start().await;
    backend.route("/homePosts", MockResponse::json("[]").with_delay(2_000));

    let err = service(&backend).home_posts().await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let port = free_port();
    let service = HttpContentService::new(&api_config(&format!("http://127.0.0.1:{port}"))).unwrap();

    let err = service.home_posts().await.unwrap_err();
    assert!(matches!(err, ApiError::ConnectionError { .. }), "got {:?}", err);
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = HttpContentService::new(&api_config("not a url"))
        .err()
        .expect("invalid URL must fail");
    assert!(matches!(err, ApiError::InvalidUrl { .. }));
}
