// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tagged union of action outcomes

use super::failure::Failure;
use super::success::Success;

/// Reified outcome of an executed action
///
/// Exactly one `ExecutionResult` is produced per action invocation: a
/// [`Success`] when the action resolves, a [`Failure`] when it fails. The
/// enum makes mixed or partial states unrepresentable, and matching on it is
/// exhaustive by construction.
///
/// # Type Parameters
///
/// - `I`: The input value that triggered the action
/// - `O`: The value a successful action resolves with
/// - `E`: The error a failed action produces (opaque to this crate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult<I, O, E> {
    /// The action resolved with an output
    Success(Success<I, O>),
    /// The action failed with an error
    Failure(Failure<I, E>),
}

impl<I, O, E> ExecutionResult<I, O, E> {
    /// Create a success result from an input and the output it produced
    pub fn success(input: I, output: O) -> Self {
        Self::Success(Success::new(input, output))
    }

    /// Create a failure result from an input and the error it produced
    pub fn failure(input: I, error: E) -> Self {
        Self::Failure(Failure::new(input, error))
    }

    /// Whether this result is a [`Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this result is a [`Failure`]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The input that triggered the action, common to both variants
    pub fn input(&self) -> &I {
        match self {
            Self::Success(success) => &success.input,
            Self::Failure(failure) => &failure.input,
        }
    }

    /// Borrow the success record, if this result is one
    pub fn as_success(&self) -> Option<&Success<I, O>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure record, if this result is one
    pub fn as_failure(&self) -> Option<&Failure<I, E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Consume the result, yielding the success record if it is one
    pub fn into_success(self) -> Option<Success<I, O>> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure(_) => None,
        }
    }

    /// Consume the result, yielding the failure record if it is one
    pub fn into_failure(self) -> Option<Failure<I, E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

impl<I, O, E> From<Success<I, O>> for ExecutionResult<I, O, E> {
    fn from(success: Success<I, O>) -> Self {
        Self::Success(success)
    }
}

impl<I, O, E> From<Failure<I, E>> for ExecutionResult<I, O, E> {
    fn from(failure: Failure<I, E>) -> Self {
        Self::Failure(failure)
    }
}
