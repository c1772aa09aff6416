// Copyright (c) 2025 - Cowboy AI, Inc.
//! Action Result Model
//!
//! This module provides the value types that carry the outcome of an executed
//! action. An action is any asynchronous, fallible operation (an HTTP call or
//! a command dispatch, say); its terminal state is reified into exactly one
//! [`ExecutionResult`] per triggering input.
//!
//! # Core Types
//!
//! ## Success<I, O>
//!
//! The action resolved with a value. Carries the `input` that triggered the
//! action and the `output` it produced.
//!
//! ## Failure<I, E>
//!
//! The action failed. Carries the `input` that triggered the action and the
//! `error` it failed with. The error type is opaque to this crate; it is
//! interpreted only by caller-supplied callbacks.
//!
//! ## ExecutionResult<I, O, E>
//!
//! The exhaustive union of the two. Because it is an enum, a result carries
//! exactly one of `output` or `error`, and matching on it is checked by the
//! compiler; callers cannot silently ignore a variant.
//!
//! # Value Semantics
//!
//! Results are immutable values: constructed exactly once per action
//! invocation by the execute operator, pattern-matched downstream, and
//! discarded within a single stream event. Nothing in this module has
//! identity or mutation across time.
//!
//! # Examples
//!
//! ```rust,ignore
//! use cim_fx::{ExecutionResult, Success};
//!
//! let result: ExecutionResult<u32, String, String> =
//!     ExecutionResult::success(7, "seven".to_string());
//!
//! match result {
//!     ExecutionResult::Success(s) => println!("{} -> {}", s.input, s.output),
//!     ExecutionResult::Failure(f) => println!("{} failed: {}", f.input, f.error),
//! }
//! ```

pub mod failure;
pub mod result;
pub mod success;

pub use failure::Failure;
pub use result::ExecutionResult;
pub use success::Success;
