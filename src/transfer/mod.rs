// ABOUTME: Producer adapter that turns file-transfer outcomes into notifications
// Completion and failure events become success and error toasts

/// Event-to-toast mapping.
pub mod notifier;

pub use notifier::{format_bytes, TransferEvent, TransferNotifier};
