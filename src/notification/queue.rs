// ABOUTME: Notification queue that assigns ids, keeps display order and retires toasts
// Every mutation goes through one watch sender; expiry tasks reuse the same remove path

use super::view::NotificationView;
use crate::config::NotifyConfig;
use crate::models::{Notification, NotificationId, Severity};
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, warn};

#[derive(Debug)]
struct Shared {
    next_id: AtomicU64,
    active: watch::Sender<Vec<Notification>>,
    config: NotifyConfig,
    runtime: Option<Handle>,
}

impl Shared {
    fn remove(&self, id: NotificationId) -> bool {
        self.active.send_if_modified(|active| {
            match active.iter().position(|n| n.id() == id) {
                Some(index) => {
                    active.remove(index);
                    true
                }
                None => false,
            }
        })
    }
}

/// The application's notification queue.
///
/// Cloning yields another handle to the same queue, so the composition root
/// can build one and hand clones to producers and the renderer.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    shared: Arc<Shared>,
}

impl NotificationQueue {
    /// Builds a queue with the built-in default durations.
    pub fn new() -> Self {
        Self::with_config(NotifyConfig::default())
    }

    /// Builds a queue using `config` for default durations. The runtime current
    /// at construction drives expiry timers for calls made outside any runtime.
    pub fn with_config(config: NotifyConfig) -> Self {
        let (active, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                next_id: AtomicU64::new(0),
                active,
                config,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    /// Durations this queue falls back to when a producer passes none.
    pub fn config(&self) -> &NotifyConfig {
        &self.shared.config
    }

    /// Appends a notification and returns its id.
    ///
    /// A non-zero `duration` schedules removal exactly `duration` after this
    /// call; zero keeps the notification until [`remove`](Self::remove).
    pub fn enqueue(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> NotificationId {
        let enqueued_at = Instant::now();
        // Durations past the clock's range never expire
        let deadline = if duration.is_zero() {
            None
        } else {
            enqueued_at.checked_add(duration)
        };
        let message = message.into();
        let mut id = NotificationId(0);

        // Allocate inside the sender's lock so id order always matches display order
        self.shared.active.send_modify(|active| {
            id = NotificationId(self.shared.next_id.fetch_add(1, Ordering::Relaxed));
            active.push(Notification::new(id, message, severity, duration));
        });

        debug!(
            "Enqueued {} notification {} ({} ms)",
            severity,
            id,
            duration.as_millis()
        );

        match deadline {
            Some(deadline) => self.schedule_expiry(id, deadline),
            None if !duration.is_zero() => {
                debug!("Notification {} outlives the clock, keeping until removed", id);
            }
            None => {}
        }

        id
    }

    /// Enqueues with the generic default duration (3000 ms unless configured),
    /// whatever the severity. The severity wrappers use their own defaults.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.enqueue(message, severity, self.shared.config.default_duration())
    }

    fn post(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.enqueue(message, severity, self.shared.config.duration_for(severity))
    }

    /// Success toast with the success default (3000 ms).
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Success)
    }

    /// Error toast with the error default (5000 ms).
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Error)
    }

    /// Warning toast with the warning default (4000 ms).
    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Warning)
    }

    /// Info toast with the info default (3000 ms).
    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.post(message, Severity::Info)
    }

    /// Success toast with an explicit duration.
    pub fn success_for(&self, message: impl Into<String>, duration: Duration) -> NotificationId {
        self.enqueue(message, Severity::Success, duration)
    }

    /// Error toast with an explicit duration.
    pub fn error_for(&self, message: impl Into<String>, duration: Duration) -> NotificationId {
        self.enqueue(message, Severity::Error, duration)
    }

    /// Warning toast with an explicit duration.
    pub fn warning_for(&self, message: impl Into<String>, duration: Duration) -> NotificationId {
        self.enqueue(message, Severity::Warning, duration)
    }

    /// Info toast with an explicit duration.
    pub fn info_for(&self, message: impl Into<String>, duration: Duration) -> NotificationId {
        self.enqueue(message, Severity::Info, duration)
    }

    /// Posts a success on `Ok`, or an error carrying the failure text on `Err`.
    pub fn report<T, E: Display>(
        &self,
        result: &Result<T, E>,
        success_message: impl Into<String>,
    ) -> NotificationId {
        match result {
            Ok(_) => self.success(success_message),
            Err(e) => self.error(e.to_string()),
        }
    }

    /// Removes the notification if it is still active. Unknown or already
    /// removed ids are ignored.
    pub fn remove(&self, id: NotificationId) {
        if self.shared.remove(id) {
            debug!("Removed notification {}", id);
        }
    }

    /// Drops every active notification. Pending expiry timers become no-ops.
    pub fn clear(&self) {
        self.shared.active.send_if_modified(|active| {
            let had_any = !active.is_empty();
            active.clear();
            had_any
        });
    }

    /// Live read-only view for renderers.
    pub fn view(&self) -> NotificationView {
        NotificationView::new(self.shared.active.subscribe())
    }

    /// Number of active notifications.
    pub fn len(&self) -> usize {
        self.shared.active.borrow().len()
    }

    /// Whether no notification is active.
    pub fn is_empty(&self) -> bool {
        self.shared.active.borrow().is_empty()
    }

    fn schedule_expiry(&self, id: NotificationId, deadline: Instant) {
        // The caller's runtime wins: the one captured at construction may
        // have shut down since, and spawning there drops the task silently
        let Some(runtime) = Handle::try_current()
            .ok()
            .or_else(|| self.shared.runtime.clone())
        else {
            warn!(
                "No tokio runtime available, notification {} stays until removed",
                id
            );
            return;
        };

        // Fire-and-forget: a manual remove does not cancel the timer, the
        // late removal simply finds nothing to do
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = shared.upgrade() {
                if shared.remove(id) {
                    debug!("Notification {} expired", id);
                }
            }
        });
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
