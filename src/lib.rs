// ABOUTME: Library crate for transfer-toasts exposing the notification queue for producers and renderers

//! Toast notifications for a file-transfer client: severity defaults,
//! auto-expiry and a live read-only view for renderers.

/// Default durations loaded from `config.toml`.
pub mod config;
/// Notification data types.
pub mod models;
/// The queue and its renderer view.
pub mod notification;
/// Transfer outcome notifications.
pub mod transfer;

pub use config::{ConfigError, NotifyConfig};
pub use models::{Notification, NotificationId, Severity};
pub use notification::{NotificationQueue, NotificationView};
