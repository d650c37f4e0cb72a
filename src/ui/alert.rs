use crate::api::Resource;
use crate::view::labels::ALERT_TITLE;

/// Modal error notice. Several may queue; the front one is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    pub fn fetch_failed(resource: Resource) -> Self {
        Self {
            title: ALERT_TITLE,
            message: resource.alert_message(),
        }
    }
}
