use std::sync::Mutex;

use super::PipelineState;

pub const SEARCHING_MESSAGE: &str = "Searching for route...";
pub const FETCHING_DETAILS_MESSAGE: &str = "Fetching route details...";
pub const DONE_MESSAGE: &str = "Route successfully retrieved and stored!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Progress,
    Success,
    Error,
}

/// advisory status emitted when the pipeline enters a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotification {
    pub state: PipelineState,
    pub level: StatusLevel,
    pub message: String,
}

impl StatusNotification {
    /// the standard notification for entering `state`, if that state has one.
    pub fn on_enter(state: PipelineState) -> Option<StatusNotification> {
        let (level, message) = match state {
            PipelineState::Geocoding | PipelineState::Routing => {
                (StatusLevel::Progress, SEARCHING_MESSAGE)
            }
            PipelineState::Aggregating => (StatusLevel::Progress, FETCHING_DETAILS_MESSAGE),
            PipelineState::Done => (StatusLevel::Success, DONE_MESSAGE),
            _ => return None,
        };
        Some(StatusNotification {
            state,
            level,
            message: String::from(message),
        })
    }

    pub fn failure(message: String) -> StatusNotification {
        StatusNotification {
            state: PipelineState::Failed,
            level: StatusLevel::Error,
            message,
        }
    }
}

/// receives status notifications as a run progresses.
pub trait StatusObserver: Send + Sync {
    fn notify(&self, notification: &StatusNotification);
}

/// writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatusObserver;

impl StatusObserver for LogStatusObserver {
    fn notify(&self, notification: &StatusNotification) {
        match notification.level {
            StatusLevel::Error => log::error!("[{}] {}", notification.state, notification.message),
            _ => log::info!("[{}] {}", notification.state, notification.message),
        }
    }
}

/// keeps every notification in arrival order.
#[derive(Debug, Default)]
pub struct RecordingStatusObserver {
    notifications: Mutex<Vec<StatusNotification>>,
}

impl RecordingStatusObserver {
    pub fn notifications(&self) -> Vec<StatusNotification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }
}

impl StatusObserver for RecordingStatusObserver {
    fn notify(&self, notification: &StatusNotification) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
    }
}
