// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test doubles for the Fx collaborators
//!
//! Deterministic in-memory stand-ins for the [`Notifier`] and [`Confirm`]
//! traits, plus a one-call helper that wires them into a service. Tests
//! drive streams against real operator code while scripting and inspecting
//! the collaborator edge:
//!
//! ```rust,ignore
//! use cim_fx::testing::fx_with_doubles;
//!
//! let (fx, doubles) = fx_with_doubles::<String, String>();
//! doubles.confirm.set_decision(false);
//!
//! // ... run a pipeline built from `fx` ...
//!
//! assert_eq!(doubles.confirm.prompt_count(), 1);
//! assert_eq!(doubles.notifier.success_count(), 0);
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::confirm::Confirm;
use crate::model::{Failure, Success};
use crate::notifier::Notifier;
use crate::service::FxService;

/// Notifier that discards everything
///
/// For tests that exercise notification plumbing but assert nothing about
/// it.
#[derive(Debug, Default)]
pub struct NoopNotifier<D> {
    _data: PhantomData<fn(D)>,
}

impl<D> NoopNotifier<D> {
    pub fn new() -> Self {
        Self { _data: PhantomData }
    }
}

impl<D: Send> Notifier for NoopNotifier<D> {
    type Data = D;

    fn open_success<I, O>(&self, _data: D, _success: &Success<I, O>)
    where
        I: Debug,
        O: Debug,
    {
    }

    fn open_failure<I, E>(&self, _data: D, _failure: &Failure<I, E>)
    where
        I: Debug,
        E: Debug,
    {
    }
}

/// One recorded notifier invocation
///
/// `data` is the payload the pipeline derived; `result` is the triggering
/// result record rendered with `Debug`, so assertions can match on it
/// without threading the result's type parameters through the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierCall<D> {
    pub data: D,
    pub result: String,
}

/// Notifier that records every invocation
///
/// Captures success and failure notifications separately, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNotifier<D> {
    successes: Mutex<Vec<NotifierCall<D>>>,
    failures: Mutex<Vec<NotifierCall<D>>>,
}

impl<D> RecordingNotifier<D> {
    pub fn new() -> Self {
        Self {
            successes: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Number of success notifications received
    pub fn success_count(&self) -> usize {
        self.successes.lock().expect("notifier lock poisoned").len()
    }

    /// Number of failure notifications received
    pub fn failure_count(&self) -> usize {
        self.failures.lock().expect("notifier lock poisoned").len()
    }
}

impl<D: Clone> RecordingNotifier<D> {
    /// All success notifications, in arrival order
    pub fn successes(&self) -> Vec<NotifierCall<D>> {
        self.successes
            .lock()
            .expect("notifier lock poisoned")
            .clone()
    }

    /// All failure notifications, in arrival order
    pub fn failures(&self) -> Vec<NotifierCall<D>> {
        self.failures
            .lock()
            .expect("notifier lock poisoned")
            .clone()
    }

    /// Most recent success notification, if any
    pub fn last_success(&self) -> Option<NotifierCall<D>> {
        self.successes
            .lock()
            .expect("notifier lock poisoned")
            .last()
            .cloned()
    }

    /// Most recent failure notification, if any
    pub fn last_failure(&self) -> Option<NotifierCall<D>> {
        self.failures
            .lock()
            .expect("notifier lock poisoned")
            .last()
            .cloned()
    }
}

impl<D: Send> Notifier for RecordingNotifier<D> {
    type Data = D;

    fn open_success<I, O>(&self, data: D, success: &Success<I, O>)
    where
        I: Debug,
        O: Debug,
    {
        self.successes
            .lock()
            .expect("notifier lock poisoned")
            .push(NotifierCall {
                data,
                result: format!("{success:?}"),
            });
    }

    fn open_failure<I, E>(&self, data: D, failure: &Failure<I, E>)
    where
        I: Debug,
        E: Debug,
    {
        self.failures
            .lock()
            .expect("notifier lock poisoned")
            .push(NotifierCall {
                data,
                result: format!("{failure:?}"),
            });
    }
}

/// Confirm that answers from a preset decision
///
/// Records every prompt it was opened with and resolves immediately with
/// the current decision. Starts out confirming; flip it with
/// [`set_decision`](StubConfirm::set_decision) or construct a declining one
/// with [`declining`](StubConfirm::declining). The decision can change
/// between prompts, mid-stream.
#[derive(Debug)]
pub struct StubConfirm<P> {
    decision: AtomicBool,
    prompts: Mutex<Vec<P>>,
}

impl<P> StubConfirm<P> {
    /// Create a stub that confirms every prompt
    pub fn new() -> Self {
        Self {
            decision: AtomicBool::new(true),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a stub that declines every prompt
    pub fn declining() -> Self {
        let stub = Self::new();
        stub.set_decision(false);
        stub
    }

    /// Set the answer returned to subsequent prompts
    pub fn set_decision(&self, decision: bool) {
        self.decision.store(decision, Ordering::SeqCst);
    }

    /// Number of prompts opened so far
    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().expect("prompt lock poisoned").len()
    }

    /// Most recent prompt, if any
    pub fn last_prompt(&self) -> Option<P>
    where
        P: Clone,
    {
        self.prompts
            .lock()
            .expect("prompt lock poisoned")
            .last()
            .cloned()
    }

    /// All prompts opened so far, in arrival order
    pub fn prompts(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.prompts.lock().expect("prompt lock poisoned").clone()
    }
}

impl<P> Default for StubConfirm<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<P: Send + 'static> Confirm for StubConfirm<P> {
    type Prompt = P;

    async fn open<I>(&self, prompt: P, _input: I) -> bool
    where
        I: Debug + Send + 'static,
    {
        self.prompts.lock().expect("prompt lock poisoned").push(prompt);
        self.decision.load(Ordering::SeqCst)
    }
}

/// Handles onto the doubles behind [`fx_with_doubles`]
pub struct FxDoubles<D, P> {
    pub notifier: Arc<RecordingNotifier<D>>,
    pub confirm: Arc<StubConfirm<P>>,
}

/// Create a service wired to fresh recording doubles
///
/// Returns the service and the handles the service was built from, so a
/// test can script the confirm and inspect both collaborators after the
/// stream has run.
pub fn fx_with_doubles<D, P>() -> (FxService<RecordingNotifier<D>, StubConfirm<P>>, FxDoubles<D, P>)
where
    D: Send,
    P: Send + 'static,
{
    let notifier = Arc::new(RecordingNotifier::new());
    let confirm = Arc::new(StubConfirm::new());
    let fx = FxService::from_parts(Arc::clone(&notifier), Arc::clone(&confirm));
    (fx, FxDoubles { notifier, confirm })
}
