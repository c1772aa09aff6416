//! Reactive action-result streams for the Composable Information Machine
//!
//! This crate turns fallible async actions into streams of explicit
//! success/failure events. [`FxService`] provides the operators: execute
//! actions with switch-to-latest semantics, tap and map the results, push
//! notifications to the user, and gate values behind a confirmation
//! dialog. The [`testing`] module ships deterministic doubles for both
//! collaborator seams.

pub mod confirm;
pub mod errors;
pub mod model;
pub mod notifier;
pub mod operators;
pub mod service;
pub mod testing;

// Re-export commonly used types
pub use confirm::{Confirm, PromptConfig, StdinConfirm};
pub use errors::{PromptError, PromptResult};
pub use model::{ExecutionResult, Failure, Success};
pub use notifier::{LogNotifier, Notifier};
pub use operators::{ConfirmFilter, Execute};
pub use service::FxService;
