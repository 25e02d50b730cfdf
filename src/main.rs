// ABOUTME: Demo entry point that posts notifications and renders the live queue as text
// Stands in for a real producer and renderer so the queue can be exercised from a shell

//! Demo command-line producer and text renderer for the notification queue.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use transfer_toasts::transfer::{TransferEvent, TransferNotifier};
use transfer_toasts::{Notification, NotificationQueue, NotificationView, NotifyConfig, Severity};

#[derive(Debug, Parser)]
#[command(name = "transfer-toasts", version, about = "Post and watch transfer client notifications")]
struct Cli {
    /// Config file with default durations (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print each view change as a JSON array
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Post one notification and watch it until it expires
    Post {
        severity: Severity,
        message: String,
        /// Override the severity's default duration; 0 keeps it until removed
        #[arg(long)]
        duration_ms: Option<u64>,
    },
    /// Run a scripted session of API and transfer notifications
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NotifyConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => NotifyConfig::load_or_default(),
    };

    let queue = NotificationQueue::with_config(config);

    match cli.command {
        Command::Post {
            severity,
            message,
            duration_ms,
        } => {
            let duration = duration_ms
                .map_or_else(|| queue.config().duration_for(severity), Duration::from_millis);
            let id = queue.enqueue(message, severity, duration);
            info!("Posted notification {}", id);

            if duration.is_zero() {
                print_snapshot(&queue.view().snapshot(), cli.json)?;
                return Ok(());
            }
            render_until_empty(queue.view(), cli.json).await?;
        }
        Command::Demo => {
            let renderer = tokio::spawn(render_until_empty(queue.view(), cli.json));
            run_demo(&queue).await;
            renderer.await??;
        }
    }

    Ok(())
}

async fn run_demo(queue: &NotificationQueue) {
    let saved = queue.success("Saved");
    queue.error("Failed");
    tokio::time::sleep(Duration::from_millis(500)).await;
    queue.remove(saved);

    let transfers = TransferNotifier::new(queue.clone());
    transfers.notify(&TransferEvent::Completed {
        transfer_id: "TX-0001".to_string(),
        bytes: 5 * 1024 * 1024 + 300 * 1024,
    });
    tokio::time::sleep(Duration::from_millis(250)).await;
    transfers.notify(&TransferEvent::Failed {
        transfer_id: "TX-0002".to_string(),
        reason: "remote partner refused connection".to_string(),
    });
    queue.warning("Retrying TX-0002 in 30s");
}

async fn render_until_empty(view: NotificationView, json: bool) -> Result<()> {
    let mut snapshots = view.into_stream();
    let mut seen_any = false;
    while let Some(snapshot) = snapshots.next().await {
        print_snapshot(&snapshot, json)?;
        seen_any |= !snapshot.is_empty();
        if seen_any && snapshot.is_empty() {
            break;
        }
    }
    Ok(())
}

fn print_snapshot(snapshot: &[Notification], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    println!("--- {} active ---", snapshot.len());
    for notification in snapshot {
        println!(
            "[{:>7}] #{} {}",
            notification.severity(),
            notification.id(),
            notification.message()
        );
    }
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transfer_toasts=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
    }));
}
