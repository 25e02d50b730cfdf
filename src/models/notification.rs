// ABOUTME: Notification data model shared by producers and renderers
// A notification is immutable once created; only the queue assigns ids and timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Identity of a notification, unique for the lifetime of its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub(crate) u64);

impl NotificationId {
    /// Raw numeric value, as handed to renderers.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a notification. Drives the default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An operation went through.
    Success,
    /// An operation failed; shown longest by default.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral status; the default severity.
    #[default]
    Info,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Warning, Self::Info];

    /// Built-in display duration when neither config nor caller overrides it.
    pub const fn default_duration(self) -> Duration {
        match self {
            Self::Success | Self::Info => Duration::from_millis(3000),
            Self::Error => Duration::from_millis(5000),
            Self::Warning => Duration::from_millis(4000),
        }
    }

    /// Lowercase name, as used in serialized notifications.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected success, error, warning or info)")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// A single active toast.
///
/// Serialized as `{ id, message, type, duration, created_at }` with the
/// duration in milliseconds, which is the shape web renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    id: NotificationId,
    message: String,
    #[serde(rename = "type")]
    severity: Severity,
    #[serde(serialize_with = "serialize_millis")]
    duration: Duration,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        severity: Severity,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            message,
            severity,
            duration,
            created_at: Utc::now(),
        }
    }

    /// Identity assigned by the queue.
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity the notification was posted with.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Display duration; zero means the notification stays until removed.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Display duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        millis(self.duration)
    }

    /// Wall-clock time the notification was enqueued.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the notification stays until explicitly removed.
    pub const fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(millis(*duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations_per_severity() {
        assert_eq!(Severity::Success.default_duration(), Duration::from_millis(3000));
        assert_eq!(Severity::Error.default_duration(), Duration::from_millis(5000));
        assert_eq!(Severity::Warning.default_duration(), Duration::from_millis(4000));
        assert_eq!(Severity::Info.default_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_parse_severity() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!(" Warning ".parse::<Severity>(), Ok(Severity::Warning));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serializes_in_renderer_shape() {
        let notification = Notification::new(
            NotificationId(7),
            "Saved".to_string(),
            Severity::Success,
            Duration::from_millis(3000),
        );

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["message"], "Saved");
        assert_eq!(json["type"], "success");
        assert_eq!(json["duration"], 3000);
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("[{:>7}]", Severity::Error), "[  error]");
        assert_eq!(format!("[{:<8}]", Severity::Info), "[info    ]");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_zero_duration_is_persistent() {
        let notification = Notification::new(
            NotificationId(0),
            "Sticky".to_string(),
            Severity::Error,
            Duration::ZERO,
        );
        assert!(notification.is_persistent());
        assert_eq!(notification.duration_ms(), 0);
    }
}
