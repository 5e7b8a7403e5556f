//! Error types for network configuration operations.

use std::io;

use super::validation::ValidationError;

/// Result type for network configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or changing interface configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command could not be started at all.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An external command exited with a nonzero status.
    ///
    /// Output is kept verbatim so it can be shown to the operator.
    #[error("{operation}: {}", command_detail(.code, .stdout, .stderr))]
    Command {
        /// The operation that failed (e.g. "set dns on Ethernet").
        operation: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// A staged static configuration broke a validation rule.
    ///
    /// Always raised before any command ran for the interface.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

fn command_detail(code: &Option<i32>, stdout: &str, stderr: &str) -> String {
    let text = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };
    match (code, text.is_empty()) {
        (Some(code), true) => format!("exited with status {code}"),
        (None, true) => "terminated by signal".to_string(),
        (_, false) => text.to_string(),
    }
}

impl Error {
    /// Build a command error for `operation` from captured output.
    pub fn command(
        operation: impl Into<String>,
        code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Command {
            operation: operation.into(),
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Check if this error was raised before touching the host.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The text the operator should see for a failed command.
    ///
    /// Standard error when the tool wrote any, standard output otherwise.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Command { stdout, stderr, .. } => {
                if stderr.trim().is_empty() {
                    Some(stdout.trim())
                } else {
                    Some(stderr.trim())
                }
            }
            _ => None,
        }
    }
}
