// Copyright (c) 2025 - Cowboy AI, Inc.
//! Failed action outcome

/// Failed outcome of an executed action
///
/// Pairs the input that triggered the action with the error the action failed
/// with. The error is stored opaquely: this crate never inspects it, it only
/// hands it to caller-supplied callbacks.
///
/// # Type Parameters
///
/// - `I`: The input value that triggered the action
/// - `E`: The error the action failed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<I, E> {
    /// Value that triggered the action
    pub input: I,
    /// Error the action failed with
    pub error: E,
}

impl<I, E> Failure<I, E> {
    /// Create a failure record from an input and the error it produced
    pub fn new(input: I, error: E) -> Self {
        Self { input, error }
    }
}
