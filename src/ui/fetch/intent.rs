use crate::ui::mvi::Intent;

/// Identifies one issued request. Allocated by the app, unique per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug)]
pub enum FetchIntent<T> {
    /// Initial request issued on activation.
    Start { request: RequestId },

    /// No identifier to fetch with; settle on the empty state without a request.
    Skip,

    /// Manual re-fetch. Only the refresh indicator is raised.
    Refresh { request: RequestId },

    Succeeded { request: RequestId, data: T },

    /// Failure is not stored; the caller raises the alert.
    Failed { request: RequestId },
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
