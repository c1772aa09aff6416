// Copyright (c) 2025 - Cowboy AI, Inc.
//! Successful action outcome

/// Successful outcome of an executed action
///
/// Pairs the input that triggered the action with the value the action
/// resolved to. Both fields are public; the record has no behavior of its
/// own.
///
/// # Type Parameters
///
/// - `I`: The input value that triggered the action
/// - `O`: The value the action resolved with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<I, O> {
    /// Value that triggered the action
    pub input: I,
    /// Value the action resolved with
    pub output: O,
}

impl<I, O> Success<I, O> {
    /// Create a success record from an input and the output it produced
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
