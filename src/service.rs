// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fx Service: composable operators over action results
//!
//! This module provides the orchestration surface of the crate: a stateless
//! set of stream-operator factories that run actions and react to their
//! results through the two collaborators.
//!
//! # Architecture
//!
//! ```text
//! inputs (Stream<I>)
//!     ↓
//! confirm_filter ──── Confirm collaborator (user approval, exhaust)
//!     ↓
//! execute ─────────── action I -> Future<Result<O, E>> (switch-to-latest)
//!     ↓
//! Stream<ExecutionResult<I, O, E>>
//!     ↓
//! on_success / on_failure ───── side-effecting taps
//! notify_success / notify_failure ── Notifier collaborator
//!     ↓
//! map_result ──────── reduce each result to a caller-chosen value
//! ```
//!
//! # Collaborator Wiring
//!
//! The service resolves its two collaborators once, at construction, and
//! holds them behind `Arc`. The constructors cover the override matrix of a
//! composition root:
//!
//! - [`FxService::with_defaults`] - log-backed notifier, stdin-backed confirm
//! - [`FxService::with_notifier`] - custom notifier, default confirm
//! - [`FxService::with_confirm`] - default notifier, custom confirm
//! - [`FxService::new`] - both custom
//!
//! Apart from the collaborator handles the service is stateless: every
//! operator closes over only its own configuration, so one service can feed
//! any number of concurrent streams and the service itself is cheap to
//! clone.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_fx::FxService;
//! use futures::{stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fx = FxService::with_defaults();
//!
//!     let clicks = stream::iter(vec![1u32, 2, 3]);
//!     let results = fx.execute(clicks, |id| async move { fetch_user(id).await });
//!     let results = fx.notify_failure(results, |f| format!("load failed: {}", f.error));
//!
//!     let names: Vec<String> = fx
//!         .map_result(results, |s| s.output, |f| format!("<user {}>", f.input))
//!         .collect()
//!         .await;
//! }
//! ```

use std::fmt;
use std::fmt::Debug;
use std::future::Future;
use std::sync::Arc;

use futures::{Stream, StreamExt};

use crate::confirm::{Confirm, StdinConfirm};
use crate::model::{ExecutionResult, Failure, Success};
use crate::notifier::{LogNotifier, Notifier};
use crate::operators::{ConfirmFilter, Execute};

/// Stateless factory for action-result stream operators
///
/// Generic over its two collaborators: `N` surfaces results to the user,
/// `C` asks the user for approval. Both are resolved at construction and
/// shared by every stream the service creates.
pub struct FxService<N, C> {
    notifier: Arc<N>,
    confirm: Arc<C>,
}

impl FxService<LogNotifier, StdinConfirm> {
    /// Create a service wired to the default collaborators
    ///
    /// Notifications go to the process log; confirmations prompt on the
    /// terminal.
    pub fn with_defaults() -> Self {
        Self::new(LogNotifier, StdinConfirm::default())
    }
}

impl<N: Notifier> FxService<N, StdinConfirm> {
    /// Create a service with a custom notifier and the default confirm
    pub fn with_notifier(notifier: N) -> Self {
        Self::new(notifier, StdinConfirm::default())
    }
}

impl<C: Confirm> FxService<LogNotifier, C> {
    /// Create a service with a custom confirm and the default notifier
    pub fn with_confirm(confirm: C) -> Self {
        Self::new(LogNotifier, confirm)
    }
}

impl<N, C> FxService<N, C>
where
    N: Notifier,
    C: Confirm,
{
    /// Create a service from both collaborators
    pub fn new(notifier: N, confirm: C) -> Self {
        Self {
            notifier: Arc::new(notifier),
            confirm: Arc::new(confirm),
        }
    }

    /// Create a service from shared collaborator handles
    ///
    /// Useful when the caller needs to keep its own handle to a
    /// collaborator, as the [`testing`](crate::testing) doubles do.
    pub fn from_parts(notifier: Arc<N>, confirm: Arc<C>) -> Self {
        Self { notifier, confirm }
    }

    /// Run an action per input and reify its outcome into a result event
    ///
    /// For each incoming input the action is invoked and its terminal state
    /// becomes exactly one [`ExecutionResult`]: `Success { input, output }`
    /// when the action resolves, `Failure { input, error }` when it fails.
    /// Failures are values, not stream errors; the returned stream never
    /// terminates because an action failed.
    ///
    /// Concurrency policy: switch-to-latest. A new input drops an in-flight
    /// action; only the most recent input's outcome is observed. A dropped
    /// action is cancelled with its future and leaves no event behind.
    pub fn execute<S, F, Fut, I, O, E>(&self, source: S, action: F) -> Execute<S, F, Fut, I>
    where
        S: Stream<Item = I>,
        F: FnMut(I) -> Fut,
        Fut: Future<Output = Result<O, E>>,
        I: Clone,
    {
        Execute::new(source, action)
    }

    /// Reduce every result to a caller-chosen value
    ///
    /// Invokes exactly one of the two callbacks per result, matched on the
    /// variant: `success` receives the owned [`Success`] record, `failure`
    /// the owned [`Failure`] record. The match is exhaustive by
    /// construction, so neither variant can be silently ignored.
    pub fn map_result<S, I, O, E, R, SF, FF>(
        &self,
        source: S,
        mut success: SF,
        mut failure: FF,
    ) -> impl Stream<Item = R>
    where
        S: Stream<Item = ExecutionResult<I, O, E>>,
        SF: FnMut(Success<I, O>) -> R,
        FF: FnMut(Failure<I, E>) -> R,
    {
        source.map(move |result| match result {
            ExecutionResult::Success(s) => success(s),
            ExecutionResult::Failure(f) => failure(f),
        })
    }

    /// Observe successful results without changing the stream
    ///
    /// The callback fires only on `Success` items and receives the success
    /// record; every result passes through unchanged. A strict no-op on
    /// failures.
    pub fn on_success<S, I, O, E, F>(
        &self,
        source: S,
        mut f: F,
    ) -> impl Stream<Item = ExecutionResult<I, O, E>>
    where
        S: Stream<Item = ExecutionResult<I, O, E>>,
        F: FnMut(&Success<I, O>),
    {
        source.inspect(move |result| {
            if let ExecutionResult::Success(success) = result {
                f(success);
            }
        })
    }

    /// Observe failed results without changing the stream
    ///
    /// The callback fires only on `Failure` items and receives the failure
    /// record; every result passes through unchanged. A strict no-op on
    /// successes.
    pub fn on_failure<S, I, O, E, F>(
        &self,
        source: S,
        mut f: F,
    ) -> impl Stream<Item = ExecutionResult<I, O, E>>
    where
        S: Stream<Item = ExecutionResult<I, O, E>>,
        F: FnMut(&Failure<I, E>),
    {
        source.inspect(move |result| {
            if let ExecutionResult::Failure(failure) = result {
                f(failure);
            }
        })
    }

    /// Notify the user of successful results
    ///
    /// Derives a notification payload from each `Success` record and hands
    /// it to the notifier together with the record itself. A strict no-op on
    /// failures; results pass through unchanged either way.
    pub fn notify_success<S, I, O, E, D>(
        &self,
        source: S,
        mut derive: D,
    ) -> impl Stream<Item = ExecutionResult<I, O, E>>
    where
        S: Stream<Item = ExecutionResult<I, O, E>>,
        D: FnMut(&Success<I, O>) -> N::Data,
        I: Debug,
        O: Debug,
    {
        let notifier = Arc::clone(&self.notifier);
        self.on_success(source, move |success| {
            notifier.open_success(derive(success), success);
        })
    }

    /// Notify the user of failed results
    ///
    /// Derives a notification payload from each `Failure` record and hands
    /// it to the notifier together with the record itself. A strict no-op on
    /// successes; results pass through unchanged either way.
    pub fn notify_failure<S, I, O, E, D>(
        &self,
        source: S,
        mut derive: D,
    ) -> impl Stream<Item = ExecutionResult<I, O, E>>
    where
        S: Stream<Item = ExecutionResult<I, O, E>>,
        D: FnMut(&Failure<I, E>) -> N::Data,
        I: Debug,
        E: Debug,
    {
        let notifier = Arc::clone(&self.notifier);
        self.on_failure(source, move |failure| {
            notifier.open_failure(derive(failure), failure);
        })
    }

    /// Gate values behind a user confirmation
    ///
    /// Derives prompt data from each incoming value and opens the confirm
    /// dialog with it. Confirmed values pass through unchanged; declined
    /// values are dropped and downstream sees no event for them.
    ///
    /// Concurrency policy: exhaust. Values arriving while a confirmation is
    /// pending are dropped, so rapid triggers can never stack dialogs.
    pub fn confirm_filter<S, F, I>(&self, source: S, prompt: F) -> ConfirmFilter<S, F, C, I>
    where
        S: Stream<Item = I>,
        F: FnMut(&I) -> C::Prompt,
        I: Clone + Debug + Send + 'static,
        C: 'static,
    {
        ConfirmFilter::new(source, prompt, Arc::clone(&self.confirm))
    }
}

impl<N, C> Clone for FxService<N, C> {
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
            confirm: Arc::clone(&self.confirm),
        }
    }
}

impl<N, C> fmt::Debug for FxService<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FxService<{}, {}>",
            std::any::type_name::<N>(),
            std::any::type_name::<C>()
        )
    }
}
