// Copyright (c) 2025 - Cowboy AI, Inc.
//! Confirm collaborator for gating actions behind user approval
//!
//! A [`Confirm`] is the pluggable component that asks the user to approve an
//! action before it proceeds. The confirm-filter operator derives prompt data
//! from each incoming value and opens the dialog; the value only continues
//! downstream when the dialog resolves to `true`.
//!
//! The one contract implementations must honor is that [`Confirm::open`]
//! always settles to a boolean. A dialog that never settles stalls the gate
//! for its stream; dropping the stream cancels the pending dialog.
//!
//! The default [`StdinConfirm`] asks on the terminal and reads one line from
//! stdin, which is the native confirmation dialog of a headless process. Its
//! prompt I/O runs on the blocking thread pool so the async runtime is never
//! blocked, and any I/O failure is logged and treated as a decline so the
//! gate always settles.

use std::fmt::Debug;
use std::io::{self, Write};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::PromptResult;

/// Configuration for terminal confirmation prompts
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Answers accepted as a confirmation, compared case-insensitively
    pub accept: Vec<String>,
    /// Hint appended to every prompt
    pub hint: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            accept: vec!["y".to_string(), "yes".to_string()],
            hint: "[y/N]".to_string(),
        }
    }
}

impl PromptConfig {
    /// Whether an answer line counts as a confirmation
    ///
    /// Leading and trailing whitespace is ignored; the comparison against the
    /// accept list is case-insensitive. An empty line is a decline.
    pub fn accepts(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.accept.iter().any(|a| a.eq_ignore_ascii_case(answer))
    }
}

/// Collaborator that asks the user to approve an action
///
/// Implementations choose their own prompt payload through the associated
/// `Prompt` type; the confirm-filter operator derives a prompt of that type
/// from each incoming value.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Prompt payload this dialog accepts
    type Prompt: Send + 'static;

    /// Open the dialog and wait for the user's decision
    ///
    /// Receives both the derived prompt payload and the value awaiting
    /// approval; implementations may render either or both. Must always
    /// settle: `true` approves the action, `false` declines it.
    async fn open<I>(&self, prompt: Self::Prompt, input: I) -> bool
    where
        I: Debug + Send + 'static;
}

/// Default confirm dialog backed by a terminal prompt
///
/// Writes the prompt and the configured hint to stdout, then reads one line
/// from stdin. Answers matching the configured accept list approve the
/// action; everything else, including prompt I/O failures, declines it.
#[derive(Debug, Clone, Default)]
pub struct StdinConfirm {
    config: PromptConfig,
}

impl StdinConfirm {
    /// Create a terminal confirm dialog with the given prompt configuration
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    /// Run one prompt round-trip on the blocking thread pool
    async fn read_decision(prompt: String, config: PromptConfig) -> PromptResult<bool> {
        tokio::task::spawn_blocking(move || -> PromptResult<bool> {
            let mut stdout = io::stdout();
            write!(stdout, "{} {} ", prompt, config.hint)?;
            stdout.flush()?;

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;

            Ok(config.accepts(&answer))
        })
        .await?
    }
}

#[async_trait]
impl Confirm for StdinConfirm {
    type Prompt = String;

    async fn open<I>(&self, prompt: String, input: I) -> bool
    where
        I: Debug + Send + 'static,
    {
        debug!("Requesting confirmation for input: {:?}", input);

        match Self::read_decision(prompt, self.config.clone()).await {
            Ok(confirmed) => confirmed,
            Err(e) => {
                warn!("Confirmation prompt failed, treating as declined: {}", e);
                false
            }
        }
    }
}
