// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stream Operator Adapters
//!
//! This module provides the hand-written `Stream` adapters behind the two
//! operators whose concurrency policies have no ready-made combinator in
//! `futures`: [`Execute`] (switch-to-latest) and [`ConfirmFilter`] (exhaust).
//! The remaining operators are thin `StreamExt` compositions and live on
//! [`FxService`](crate::service::FxService) directly.
//!
//! Both adapters are poll-driven state machines: all suspension happens
//! inside `poll_next` when the source, the in-flight action, or the pending
//! dialog returns `Pending`. They spawn no tasks, so dropping the stream
//! drops any in-flight work with it.
//!
//! # Switch-to-latest (Execute)
//!
//! A new input replaces an in-flight action; only the most recent input's
//! outcome is ever observed.
//!
//! ```text
//! inputs:   ──1───────2─────────────────→
//! actions:    [1......x [2.........]
//! results:  ────────────────────●S(2)──→
//! ```
//!
//! # Exhaust (ConfirmFilter)
//!
//! While a confirmation dialog is open, newly arriving values are dropped;
//! the gate reopens once the dialog settles.
//!
//! ```text
//! inputs:   ──1───2───3────────4────────→
//! dialog:     [1......yes]     [4...no]
//! output:   ─────────────1─────────────→
//! ```

pub mod confirm_filter;
pub mod execute;

pub use confirm_filter::ConfirmFilter;
pub use execute::Execute;
