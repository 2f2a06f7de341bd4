//! Simple terminal prompts for command-line scripts.
//!
//! Prompts are written to stderr so they never pollute stdout when a
//! script's output is piped; answers are read from stdin. All prompts
//! run through the [`TerminalIO`] trait, so tests can drive them with
//! [`MockTerminal`] instead of a real terminal.
//!
//! # Quick Start
//!
//! ```no_run
//! use scriptkit_input::{prompt_confirm, prompt_value};
//!
//! let name = prompt_value("Project name", None)?;
//! let region = prompt_value("Region", Some("eu-west-1"))?;
//! if prompt_confirm("Create the project?", true)? {
//!     println!("creating {} in {}", name, region);
//! }
//! # Ok::<(), scriptkit_input::PromptError>(())
//! ```

mod error;
mod prompt;

pub use error::PromptError;
pub use prompt::{
    prompt_confirm, prompt_confirm_with, prompt_value, prompt_value_with, MockTerminal,
    RealTerminal, TerminalIO,
};
