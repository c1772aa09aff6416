// Copyright (c) 2025 - Cowboy AI, Inc.
//! Execute adapter with switch-to-latest semantics
//!
//! Wraps a stream of inputs so that each input runs the configured action and
//! its terminal state is reified into exactly one
//! [`ExecutionResult`](crate::model::ExecutionResult) event. Action failures
//! become `Failure` items; they never terminate the outer stream.
//!
//! The concurrency policy is switch-to-latest: a new input replaces an
//! in-flight action, and dropping the superseded future cancels it. At most
//! one action is in flight per stream. When several inputs are ready in a
//! single poll, each action still gets polled once in arrival order, so
//! immediately-completing actions yield one result per input while a pending
//! action is superseded by the next ready input.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use pin_project_lite::pin_project;
use tracing::debug;

use crate::model::ExecutionResult;

pin_project! {
    /// Stream adapter created by
    /// [`FxService::execute`](crate::service::FxService::execute)
    #[must_use = "streams do nothing unless polled"]
    pub struct Execute<S, F, Fut, I> {
        #[pin]
        source: S,
        action: F,
        #[pin]
        in_flight: Option<Fut>,
        // Input that triggered the in-flight action; set and cleared together
        // with `in_flight`.
        input: Option<I>,
        done: bool,
    }
}

impl<S, F, Fut, I> Execute<S, F, Fut, I> {
    pub(crate) fn new(source: S, action: F) -> Self {
        Self {
            source,
            action,
            in_flight: None,
            input: None,
            done: false,
        }
    }
}

impl<S, F, Fut, I, O, E> Stream for Execute<S, F, Fut, I>
where
    S: Stream<Item = I>,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<O, E>>,
    I: Clone,
{
    type Item = ExecutionResult<I, O, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // A completed action yields exactly one result event.
            if let Some(fut) = this.in_flight.as_mut().as_pin_mut() {
                if let Poll::Ready(outcome) = fut.poll(cx) {
                    this.in_flight.set(None);
                    let input = this
                        .input
                        .take()
                        .expect("in-flight action always has a triggering input");
                    let result = match outcome {
                        Ok(output) => ExecutionResult::success(input, output),
                        Err(error) => ExecutionResult::failure(input, error),
                    };
                    return Poll::Ready(Some(result));
                }
            }

            if *this.done {
                return if this.in_flight.is_some() {
                    Poll::Pending
                } else {
                    Poll::Ready(None)
                };
            }

            match this.source.as_mut().poll_next(cx) {
                Poll::Ready(Some(input)) => {
                    if this.in_flight.is_some() {
                        debug!("Newer input supersedes in-flight action; dropping it");
                    }
                    let fut = (this.action)(input.clone());
                    this.in_flight.set(Some(fut));
                    *this.input = Some(input);
                    // Loop to poll the fresh action before the source again.
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    if this.in_flight.is_none() {
                        return Poll::Ready(None);
                    }
                    // The in-flight action was polled above and holds the
                    // waker; its outcome is still owed downstream.
                    return Poll::Pending;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let in_flight = usize::from(self.in_flight.is_some());
        if self.done {
            return (0, Some(in_flight));
        }
        let (_, upper) = self.source.size_hint();
        (0, upper.map(|u| u.saturating_add(in_flight)))
    }
}

impl<S, F, Fut, I> fmt::Debug for Execute<S, F, Fut, I>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Execute")
            .field("source", &self.source)
            .field("in_flight", &self.in_flight.is_some())
            .field("done", &self.done)
            .finish()
    }
}
