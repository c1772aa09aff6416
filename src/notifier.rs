// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notifier collaborator for surfacing action results
//!
//! A [`Notifier`] is the pluggable component that presents an action outcome
//! to the user, whether that is a toast in a GUI shell or a line on a
//! terminal. The notify operators derive a payload from the matching result
//! and hand it to the notifier together with the result record itself.
//!
//! Notifier calls are fire-and-forget: they return nothing, and any failure
//! inside an implementation is that implementation's own concern. This crate
//! neither catches nor suppresses it.
//!
//! The default [`LogNotifier`] writes notifications to the process log via
//! `tracing`, which is the closest thing a headless process has to a native
//! alert dialog.

use std::fmt::Debug;

use tracing::{info, warn};

use crate::model::{Failure, Success};

/// Collaborator that surfaces an action result to the user
///
/// Implementations choose their own payload type through the associated
/// `Data` type; the notify operators derive a payload of that type from each
/// matching result.
pub trait Notifier: Send + Sync {
    /// Notification payload this notifier accepts
    type Data: Send;

    /// Surface a successful result
    ///
    /// # Arguments
    ///
    /// * `data` - Payload derived from the result by the caller
    /// * `success` - The success record the payload was derived from
    fn open_success<I, O>(&self, data: Self::Data, success: &Success<I, O>)
    where
        I: Debug,
        O: Debug;

    /// Surface a failed result
    ///
    /// # Arguments
    ///
    /// * `data` - Payload derived from the result by the caller
    /// * `failure` - The failure record the payload was derived from
    fn open_failure<I, E>(&self, data: Self::Data, failure: &Failure<I, E>)
    where
        I: Debug,
        E: Debug;
}

/// Default notifier backed by the process log
///
/// Success notifications are emitted at `info` level, failure notifications
/// at `warn` level, each with the result record attached in its `Debug` form.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    type Data = String;

    fn open_success<I, O>(&self, data: String, success: &Success<I, O>)
    where
        I: Debug,
        O: Debug,
    {
        info!("{} ({:?})", data, success);
    }

    fn open_failure<I, E>(&self, data: String, failure: &Failure<I, E>)
    where
        I: Debug,
        E: Debug,
    {
        warn!("{} ({:?})", data, failure);
    }
}
