// ABOUTME: Tests that the renderer-facing view tracks the queue live and stays read-only

use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::timeout;
use transfer_toasts::{NotificationQueue, Severity};

#[test]
fn test_view_taken_before_enqueue_sees_later_changes() {
    let queue = NotificationQueue::new();
    let view = queue.view();
    assert!(view.is_empty());

    let id = queue.enqueue("Transfer queued", Severity::Info, Duration::ZERO);
    assert_eq!(view.len(), 1);
    assert!(view.contains(id));

    queue.remove(id);
    assert!(view.is_empty());
}

#[tokio::test]
async fn test_changed_wakes_on_enqueue() {
    let queue = NotificationQueue::new();
    let mut view = queue.view();

    let producer = queue.clone();
    let handle = tokio::spawn(async move { producer.warning("Disk almost full") });

    assert!(view.changed().await);
    let id = handle.await.unwrap();
    assert_eq!(view.ids(), vec![id]);
}

#[tokio::test(start_paused = true)]
async fn test_changed_wakes_on_expiry() {
    let queue = NotificationQueue::new();
    let mut view = queue.view();
    queue.success_for("Saved", Duration::from_millis(3000));
    assert!(view.changed().await);
    assert_eq!(view.len(), 1);

    let started = tokio::time::Instant::now();
    assert!(view.changed().await);
    assert!(view.is_empty());
    assert!(started.elapsed() >= Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_absent_remove_does_not_notify() {
    let queue = NotificationQueue::new();
    let mut view = queue.view();

    let id = queue.enqueue("Dismissed", Severity::Info, Duration::ZERO);
    queue.remove(id);
    assert!(view.changed().await);
    assert!(view.is_empty());

    queue.remove(id);
    let result = timeout(Duration::from_millis(100), view.changed()).await;
    assert!(result.is_err(), "removing an absent id must not wake renderers");
}

#[tokio::test]
async fn test_changed_returns_false_after_queue_dropped() {
    let queue = NotificationQueue::new();
    let mut view = queue.view();
    queue.info("pending timer holds no strong reference");
    assert!(view.changed().await);

    drop(queue);
    assert!(!view.changed().await);
    assert_eq!(view.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stream_yields_snapshots_until_drained() {
    let queue = NotificationQueue::new();
    queue.error_for("Failed", Duration::from_millis(5000));
    let mut snapshots = queue.view().into_stream();

    let first = snapshots.next().await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].message(), "Failed");

    let second = snapshots.next().await.unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_snapshot_is_a_detached_copy() {
    let queue = NotificationQueue::new();
    let id = queue.enqueue("Saved", Severity::Success, Duration::ZERO);

    let mut snapshot = queue.view().snapshot();
    snapshot.clear();

    assert!(queue.view().contains(id));
}

#[test]
fn test_snapshot_serializes_for_web_renderer() {
    let queue = NotificationQueue::new();
    queue.enqueue("Saved", Severity::Success, Duration::ZERO);
    queue.enqueue("Failed", Severity::Error, Duration::ZERO);

    let json = serde_json::to_value(queue.view().snapshot()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], 0);
    assert_eq!(entries[0]["type"], "success");
    assert_eq!(entries[1]["id"], 1);
    assert_eq!(entries[1]["type"], "error");
    assert_eq!(entries[1]["duration"], 0);
}
