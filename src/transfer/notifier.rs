// ABOUTME: Maps transfer completion/failure events onto the notification queue
// Sizes are rendered in B/KB/MB/GB the way the transfer progress feed shows them

use crate::models::NotificationId;
use crate::notification::NotificationQueue;
use tracing::info;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Final outcome of a file transfer, as reported by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// All data was delivered.
    Completed {
        /// Transfer identifier shown to the user.
        transfer_id: String,
        /// Bytes transferred.
        bytes: u64,
    },
    /// The transfer stopped with an error.
    Failed {
        /// Transfer identifier shown to the user.
        transfer_id: String,
        /// Failure text from the transport layer.
        reason: String,
    },
}

/// Human-readable size: `512 B`, `1.5 KB`, `2.25 MB`, `1.00 GB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    }
}

/// Posts transfer outcomes to a shared notification queue.
#[derive(Debug, Clone)]
pub struct TransferNotifier {
    queue: NotificationQueue,
}

impl TransferNotifier {
    /// Wraps a handle to the application's queue.
    pub const fn new(queue: NotificationQueue) -> Self {
        Self { queue }
    }

    /// Posts the toast for `event` with the severity's default duration.
    pub fn notify(&self, event: &TransferEvent) -> NotificationId {
        match event {
            TransferEvent::Completed { transfer_id, bytes } => {
                info!("Transfer {} completed ({})", transfer_id, format_bytes(*bytes));
                self.queue.success(format!(
                    "Transfer {transfer_id} completed ({})",
                    format_bytes(*bytes)
                ))
            }
            TransferEvent::Failed { transfer_id, reason } => {
                info!("Transfer {} failed - {}", transfer_id, reason);
                self.queue
                    .error(format!("Transfer {transfer_id} failed: {reason}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(MIB + MIB / 4), "1.25 MB");
        assert_eq!(format_bytes(GIB), "1.00 GB");
        assert_eq!(format_bytes(3 * GIB + GIB / 2), "3.50 GB");
    }
}
