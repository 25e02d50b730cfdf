// ABOUTME: Core data models for notifications shown by the transfer client

/// Notification, id and severity types.
pub mod notification;

pub use notification::{Notification, NotificationId, ParseSeverityError, Severity};
