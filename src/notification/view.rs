// ABOUTME: Read-only live projection of the active notifications for renderers
// Wraps a watch receiver so every enqueue/remove is visible without re-fetching

use crate::models::{Notification, NotificationId};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Live, ordered, read-only view of a [`NotificationQueue`](super::NotificationQueue).
///
/// Reads always reflect the queue's current contents. Renderers that want to
/// redraw on change can await [`changed`](Self::changed) or consume
/// [`into_stream`](Self::into_stream).
#[derive(Debug, Clone)]
pub struct NotificationView {
    rx: watch::Receiver<Vec<Notification>>,
}

impl NotificationView {
    pub(crate) const fn new(rx: watch::Receiver<Vec<Notification>>) -> Self {
        Self { rx }
    }

    /// Current contents in display (insertion) order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.rx.borrow().clone()
    }

    /// Ids of the active notifications, in display order.
    pub fn ids(&self) -> Vec<NotificationId> {
        self.rx.borrow().iter().map(Notification::id).collect()
    }

    /// Copy of the notification with `id`, if it is still active.
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.rx.borrow().iter().find(|n| n.id() == id).cloned()
    }

    /// Whether `id` is still active.
    pub fn contains(&self, id: NotificationId) -> bool {
        self.rx.borrow().iter().any(|n| n.id() == id)
    }

    /// Number of active notifications.
    pub fn len(&self) -> usize {
        self.rx.borrow().len()
    }

    /// Whether no notification is active.
    pub fn is_empty(&self) -> bool {
        self.rx.borrow().is_empty()
    }

    /// Waits until the queue changes after the last observed state.
    ///
    /// Returns `false` once every queue handle has been dropped and no
    /// further change can happen.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Stream of snapshots, starting with the current contents.
    pub fn into_stream(self) -> WatchStream<Vec<Notification>> {
        WatchStream::new(self.rx)
    }
}
