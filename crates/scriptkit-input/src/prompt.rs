//! Simple terminal prompts.
//!
//! Basic interactive prompts that work without external dependencies.
//! Prompt text goes to stderr, answers come from stdin.

use std::io::{self, BufRead, Write};

use crate::PromptError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO {
    /// Write a prompt to stderr.
    fn write_prompt(&mut self, prompt: &str) -> io::Result<()>;

    /// Read one line from stdin. An empty string signals EOF.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Real terminal I/O: prompts to stderr, answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", prompt)?;
        stderr.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Ask the user for a value on the real terminal.
///
/// See [`prompt_value_with`] for the exact behavior.
pub fn prompt_value(name: &str, default: Option<&str>) -> Result<String, PromptError> {
    prompt_value_with(&mut RealTerminal, name, default)
}

/// Ask the user for a value.
///
/// Without a default the prompt reads `"{name}: "` and re-asks until
/// the answer is non-empty, printing `"{name} must not be empty!"` in
/// between. With a default the prompt reads `"{name} [{default}]: "`
/// and an empty answer yields the default.
///
/// The answer keeps interior whitespace; only the line terminator is
/// removed. EOF on stdin yields [`PromptError::Cancelled`].
pub fn prompt_value_with<T: TerminalIO>(
    terminal: &mut T,
    name: &str,
    default: Option<&str>,
) -> Result<String, PromptError> {
    match default {
        Some(default) => {
            terminal
                .write_prompt(&format!("{} [{}]: ", name, default))
                .map_err(PromptError::Io)?;
            let answer = read_answer(terminal)?;
            if answer.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(answer)
            }
        }
        None => loop {
            terminal
                .write_prompt(&format!("{}: ", name))
                .map_err(PromptError::Io)?;
            let answer = read_answer(terminal)?;
            if answer.is_empty() {
                terminal
                    .write_prompt(&format!("{} must not be empty!\n", name))
                    .map_err(PromptError::Io)?;
            } else {
                return Ok(answer);
            }
        },
    }
}

/// Ask a yes/no question on the real terminal.
///
/// See [`prompt_confirm_with`] for the exact behavior.
pub fn prompt_confirm(msg: &str, default: bool) -> Result<bool, PromptError> {
    prompt_confirm_with(&mut RealTerminal, msg, default)
}

/// Ask a yes/no question.
///
/// The prompt reads `"{msg} (y/n) [y]: "` (or `[n]`), and an empty
/// answer yields `default`. Only the first character of the answer is
/// examined and only `y`/`Y`/`n`/`N` are accepted; anything else is
/// [`PromptError::InvalidAnswer`].
pub fn prompt_confirm_with<T: TerminalIO>(
    terminal: &mut T,
    msg: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let default_answer = if default { "y" } else { "n" };
    let answer = prompt_value_with(terminal, &format!("{} (y/n)", msg), Some(default_answer))?;
    match answer.chars().next() {
        Some('y') | Some('Y') => Ok(true),
        Some('n') | Some('N') => Ok(false),
        _ => Err(PromptError::InvalidAnswer),
    }
}

/// Read one line and chop the line terminator; empty read is EOF.
fn read_answer<T: TerminalIO>(terminal: &mut T) -> Result<String, PromptError> {
    let line = terminal.read_line().map_err(PromptError::Io)?;
    if line.is_empty() {
        return Err(PromptError::Cancelled);
    }
    Ok(line
        .trim_end_matches('\n')
        .trim_end_matches('\r')
        .to_string())
}

/// Mock terminal for testing prompts.
///
/// Returns queued responses from successive `read_line` calls and
/// records every prompt written to it. Once the queue is exhausted,
/// `read_line` signals EOF.
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    next: usize,
    /// Every prompt written so far, in order.
    pub prompts: Vec<String>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock terminal that returns multiple responses in
    /// sequence. Useful for testing re-prompt loops.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            next: 0,
            prompts: Vec::new(),
        }
    }

    /// Create a mock that simulates EOF (Ctrl+D).
    pub fn eof() -> Self {
        Self::default()
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.prompts.push(prompt.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        if self.next < self.responses.len() {
            let line = format!("{}\n", self.responses[self.next]);
            self.next += 1;
            Ok(line)
        } else {
            Ok(String::new())
        }
    }
}
