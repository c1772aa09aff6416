// Copyright (c) 2025 - Cowboy AI, Inc.
//! Confirm-filter adapter with exhaust semantics
//!
//! Gates a stream of values behind the [`Confirm`] collaborator: each value
//! derives prompt data and opens the dialog, and only values whose dialog
//! resolves to `true` continue downstream. Declined values are dropped
//! silently.
//!
//! The concurrency policy is exhaust: while a confirmation is pending, newly
//! arriving values are dropped rather than queued, so a rapid sequence of
//! triggers can never stack dialogs. The gate reopens as soon as the pending
//! decision settles.

use std::fmt;
use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use futures::Stream;
use pin_project_lite::pin_project;
use tracing::debug;

use crate::confirm::Confirm;

/// A value waiting on its confirmation dialog
struct Gate<I> {
    value: I,
    decision: BoxFuture<'static, bool>,
}

pin_project! {
    /// Stream adapter created by
    /// [`FxService::confirm_filter`](crate::service::FxService::confirm_filter)
    #[must_use = "streams do nothing unless polled"]
    pub struct ConfirmFilter<S, F, C, I> {
        #[pin]
        source: S,
        prompt: F,
        confirm: Arc<C>,
        gate: Option<Gate<I>>,
        done: bool,
    }
}

impl<S, F, C, I> ConfirmFilter<S, F, C, I> {
    pub(crate) fn new(source: S, prompt: F, confirm: Arc<C>) -> Self {
        Self {
            source,
            prompt,
            confirm,
            gate: None,
            done: false,
        }
    }
}

impl<S, F, C, I> Stream for ConfirmFilter<S, F, C, I>
where
    S: Stream<Item = I>,
    F: FnMut(&I) -> C::Prompt,
    C: Confirm + 'static,
    I: Clone + Debug + Send + 'static,
{
    type Item = I;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Settle the pending confirmation before accepting new values.
            if let Some(mut gate) = this.gate.take() {
                match gate.decision.as_mut().poll(cx) {
                    Poll::Ready(true) => return Poll::Ready(Some(gate.value)),
                    Poll::Ready(false) => {
                        debug!("Confirmation declined; dropping value");
                        // The gate reopens for the next value.
                    }
                    Poll::Pending => {
                        *this.gate = Some(gate);
                        // Exhaust policy: values arriving while the dialog is
                        // open are dropped, not queued.
                        while !*this.done {
                            match this.source.as_mut().poll_next(cx) {
                                Poll::Ready(Some(_)) => {
                                    debug!("Confirmation pending; dropping incoming value");
                                }
                                Poll::Ready(None) => *this.done = true,
                                Poll::Pending => break,
                            }
                        }
                        return Poll::Pending;
                    }
                }
            }

            if *this.done {
                return Poll::Ready(None);
            }

            match this.source.as_mut().poll_next(cx) {
                Poll::Ready(Some(value)) => {
                    let prompt = (this.prompt)(&value);
                    let confirm = Arc::clone(this.confirm);
                    let input = value.clone();
                    let decision: BoxFuture<'static, bool> =
                        Box::pin(async move { confirm.open(prompt, input).await });
                    *this.gate = Some(Gate { value, decision });
                    // Loop to poll the fresh dialog before the source again.
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let gated = usize::from(self.gate.is_some());
        if self.done {
            return (0, Some(gated));
        }
        let (_, upper) = self.source.size_hint();
        (0, upper.map(|u| u.saturating_add(gated)))
    }
}

impl<S, F, C, I> fmt::Debug for ConfirmFilter<S, F, C, I>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmFilter")
            .field("source", &self.source)
            .field("awaiting_decision", &self.gate.is_some())
            .field("done", &self.done)
            .finish()
    }
}
