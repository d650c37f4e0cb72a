//! Bridges screen requests to the async content service.
//!
//! Every job runs on the tokio runtime and reports back through the UI
//! event channel, tagged with the frame and request it belongs to.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::{ApiError, Comment, ContentService, Post, PostId, Resource, UserProfile, Username};
use crate::ui::events::AppEvent;
use crate::ui::fetch::RequestId;
use crate::ui::nav::FrameId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchJob {
    HomePosts,
    Post(PostId),
    Comments(PostId),
    Profile(Username),
}

impl FetchJob {
    pub fn resource(&self) -> Resource {
        match self {
            FetchJob::HomePosts => Resource::HomePosts,
            FetchJob::Post(_) => Resource::Post,
            FetchJob::Comments(_) => Resource::Comments,
            FetchJob::Profile(_) => Resource::Profile,
        }
    }

    async fn run(self, service: &dyn ContentService) -> FetchPayload {
        match self {
            FetchJob::HomePosts => FetchPayload::HomePosts(service.home_posts().await),
            FetchJob::Post(id) => FetchPayload::Post(service.post(&id).await),
            FetchJob::Comments(id) => FetchPayload::Comments(service.comments(&id).await),
            FetchJob::Profile(username) => {
                FetchPayload::Profile(service.profile(&username).await)
            }
        }
    }
}

#[derive(Debug)]
pub enum FetchPayload {
    HomePosts(Result<Vec<Post>, ApiError>),
    Post(Result<Post, ApiError>),
    Comments(Result<Vec<Comment>, ApiError>),
    Profile(Result<UserProfile, ApiError>),
}

impl FetchPayload {
    pub fn resource(&self) -> Resource {
        match self {
            FetchPayload::HomePosts(_) => Resource::HomePosts,
            FetchPayload::Post(_) => Resource::Post,
            FetchPayload::Comments(_) => Resource::Comments,
            FetchPayload::Profile(_) => Resource::Profile,
        }
    }
}

/// Completion of one job.
#[derive(Debug)]
pub struct FetchOutcome {
    pub frame: FrameId,
    pub request: RequestId,
    pub payload: FetchPayload,
}

#[derive(Clone)]
pub struct Fetcher {
    runtime: Handle,
    service: Arc<dyn ContentService>,
    events: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(runtime: Handle, service: Arc<dyn ContentService>, events: Sender<AppEvent>) -> Self {
        Self {
            runtime,
            service,
            events,
        }
    }

    pub fn spawn(&self, frame: FrameId, request: RequestId, job: FetchJob) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tracing::debug!(
            frame = frame.0,
            request = request.0,
            resource = ?job.resource(),
            "Fetch started"
        );

        self.runtime.spawn(async move {
            let payload = job.run(service.as_ref()).await;
            let outcome = FetchOutcome {
                frame,
                request,
                payload,
            };
            if events.send(AppEvent::Fetched(outcome)).is_err() {
                tracing::debug!(frame = frame.0, "Event loop gone; dropping fetch result");
            }
        })
    }
}
