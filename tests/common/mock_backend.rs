//! In-process stand-in for the blog API.
//!
//! Responses are registered per raw request path; anything else gets a 404.
//! Every request is recorded so tests can check what the client sent.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Raw path, still percent-encoded.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Canned answer for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// Error body in the API's `{"message": ...}` shape.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message }).to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Clone, Default)]
struct Routes {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockBlogApi {
    addr: SocketAddr,
    routes: Routes,
    stop: Option<oneshot::Sender<()>>,
}

impl MockBlogApi {
    pub async fn start() -> Self {
        let routes = Routes::default();
        let app = Router::new().fallback(answer).with_state(routes.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock blog API");
        let addr = listener.local_addr().expect("mock API address");
        let (stop, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            routes,
            stop: Some(stop),
        }
    }

    /// Answers `path` (as sent on the wire) with `response` from now on.
    pub fn route(&self, path: &str, response: MockResponse) -> &Self {
        self.routes
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.routes.seen.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|req| req.path).collect()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockBlogApi {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn answer(State(routes): State<Routes>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    routes.seen.lock().unwrap().push(CapturedRequest {
        method: req.method().to_string(),
        path: path.clone(),
        headers: req
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    });

    let response = routes
        .responses
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| MockResponse::error(404, "not found"));

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
