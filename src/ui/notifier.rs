//! 定时状态通知

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ui::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn from_error_flag(is_error: bool) -> Self {
        if is_error {
            Severity::Error
        } else {
            Severity::Success
        }
    }
}

/// 显示给用户的状态消息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            shown_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// 显示通知并在固定延迟后隐藏
///
/// 只有最新的通知会被它的定时器隐藏：每次调用记录自己的 id，
/// 定时器到期时检查它是否仍是当前通知。
#[derive(Clone)]
pub struct Notifier {
    view: Arc<dyn View>,
    hide_after: Duration,
    current: Arc<Mutex<Option<Uuid>>>,
}

impl Notifier {
    pub fn new(view: Arc<dyn View>, hide_after: Duration) -> Self {
        Self {
            view,
            hide_after,
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn notify(&self, message: impl Into<String>, is_error: bool) -> Notification {
        let notification = Notification::new(message, Severity::from_error_flag(is_error));
        debug!(id = %notification.id, error = is_error, "notify: {}", notification.message);

        {
            let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
            *current = Some(notification.id);
            self.view.show_status(&notification);
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let view = Arc::clone(&self.view);
                let current = Arc::clone(&self.current);
                let id = notification.id;
                let delay = self.hide_after;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let mut current = current.lock().unwrap_or_else(|e| e.into_inner());
                    if *current == Some(id) {
                        *current = None;
                        view.hide_status();
                    }
                });
            }
            Err(_) => warn!("no tokio runtime; notification {} will not auto-hide", notification.id),
        }

        notification
    }

    /// 当前显示的通知 id
    pub fn current(&self) -> Option<Uuid> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}
