// ABOUTME: Toast notification queue with severity-based auto-expiry
// Producers post through NotificationQueue; renderers observe a NotificationView

/// Producer-facing queue.
pub mod queue;
/// Renderer-facing live view.
pub mod view;

pub use queue::NotificationQueue;
pub use view::NotificationView;
