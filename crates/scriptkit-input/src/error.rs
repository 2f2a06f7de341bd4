//! Error types for terminal prompts.

use std::io;

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Stdin reached EOF before an answer was given.
    #[error("Prompt cancelled by user.")]
    Cancelled,

    /// Writing the prompt or reading the answer failed.
    #[error("Prompt failed: {0}")]
    Io(#[source] io::Error),

    /// The answer to a confirmation was not y/n.
    #[error("Please answer y/n.")]
    InvalidAnswer,
}
