use tokio::task::JoinHandle;

/// In-flight requests owned by one mounted screen.
///
/// Dropping the group aborts whatever is still running, so a screen that
/// leaves the stack never receives late completions.
#[derive(Debug, Default)]
pub struct TaskGroup {
    handles: Vec<JoinHandle<()>>,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(handle);
    }

    /// Tasks that have not finished yet.
    pub fn active(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TaskGroup {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn drop_aborts_pending_tasks() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        let abort = handle.abort_handle();

        let mut group = TaskGroup::new();
        group.push(handle);
        assert_eq!(group.active(), 1);
        drop(group);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(abort.is_finished());
    }
}
