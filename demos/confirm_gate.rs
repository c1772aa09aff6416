// Copyright (c) 2025 - Cowboy AI, Inc.
//! Confirmation Gate Example
//!
//! Gates a destructive action behind a terminal prompt. The source
//! simulates a user triple-clicking a delete button: three requests arrive
//! back to back, the gate opens a single stdin prompt for the first one,
//! and the duplicate triggers are dropped while the prompt is open. Answer
//! `y` to let the delete run, anything else to decline it.
//!
//! Run with: cargo run --example confirm_gate

use cim_fx::FxService;
use futures::{stream, StreamExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Confirmation Gate Example ===\n");

    let fx = FxService::with_defaults();

    // Three rapid triggers for the same workspace
    let clicks = stream::iter(vec!["workspace-42", "workspace-42", "workspace-42"]);

    let approved = fx.confirm_filter(clicks, |ws| format!("Delete {ws}? This cannot be undone."));

    let results = fx.execute(approved, |ws| async move {
        Ok::<_, std::io::Error>(format!("{ws} deleted"))
    });

    let results = fx.notify_success(results, |s| format!("Removed {}", s.input));

    let mut results = Box::pin(results);
    let mut deletions = 0usize;
    while let Some(result) = results.next().await {
        if let Some(success) = result.as_success() {
            println!("  {}", success.output);
            deletions += 1;
        }
    }

    println!("\n{deletions} deletion(s) ran; duplicate clicks never re-prompted");
}
