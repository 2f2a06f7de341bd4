//! Error types for the scriptkit helpers.

use console::Style;

/// Errors produced by the scriptkit helpers.
///
/// The two validation variants keep their diagnostic text aligned with
/// the labeled lines scripts print on exit: `InvalidFormat` for input
/// that does not match the expected pattern, `InvalidArgument` for
/// well-formed input that violates an invariant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input does not match the expected pattern.
    #[error("{field} is in wrong format: {value}")]
    InvalidFormat { field: String, value: String },

    /// Input is well-formed but violates an invariant.
    #[error("{field} is invalid: {value}")]
    InvalidArgument { field: String, value: String },

    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an [`Error::InvalidFormat`].
    pub fn invalid_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an [`Error::InvalidArgument`].
    pub fn invalid_arg(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Print the labeled diagnostic for this error and terminate the
    /// process with status 1.
    ///
    /// This is the thin CLI-facing adapter; library callers should
    /// match on the variants instead of exiting.
    pub fn exit(self) -> ! {
        let tag = match &self {
            Error::InvalidFormat { .. } => "[Invalid format]",
            Error::InvalidArgument { .. } => "[Invalid argument]",
            _ => "[ERROR]",
        };
        println!("{} {}", Style::new().red().apply_to(tag), self);
        std::process::exit(1);
    }
}
