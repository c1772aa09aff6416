// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification Pipeline Example
//!
//! Builds a complete action-result pipeline: a stream of lookup requests is
//! executed against a fallible action, successes and failures are pushed
//! through the log-backed notifier, and every result is reduced to a
//! display line. Failures stay inside the stream as values, so one bad
//! request never tears the pipeline down.
//!
//! Run with: RUST_LOG=info cargo run --example notify_pipeline
//!
//! # Pipeline
//!
//! ```text
//! requests ──> execute ──> notify_success ──> notify_failure ──> map_result
//!                 │              │                   │               │
//!                 ▼              ▼                   ▼               ▼
//!         Success/Failure    info! log           warn! log        String
//! ```

use anyhow::anyhow;
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

    println!("=== Notification Pipeline Example ===\n");

    let fx = FxService::with_defaults();

    // Requests 1-5; even ids fail to simulate a flaky backend
    let requests = stream::iter(vec![1u32, 2, 3, 4, 5]);

    let results = fx.execute(requests, |id| async move {
        if id % 2 == 0 {
            Err(anyhow!("backend rejected request {id}"))
        } else {
            Ok(format!("record-{id}"))
        }
    });

    let results = fx.notify_success(results, |s| format!("Loaded {}", s.output));
    let results = fx.notify_failure(results, |f| format!("Request {} failed", f.input));

    let lines: Vec<String> = fx
        .map_result(
            results,
            |s| format!("  ok   {} -> {}", s.input, s.output),
            |f| format!("  err  {} -> {}", f.input, f.error),
        )
        .collect()
        .await;

    println!("Processed {} requests:", lines.len());
    for line in &lines {
        println!("{line}");
    }
}
