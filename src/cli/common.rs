//! Shared CLI error and exit-code handling.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input was well-formed but failed validation
    Validation = 1,
    /// Arguments were missing or contradictory
    Usage = 2,
    /// Reading input or writing output failed
    Io = 3,
}

/// Error raised by a CLI command, carrying its exit code.
#[derive(Debug)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// A usage error: missing or contradictory arguments.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Usage,
            message: message.into(),
        }
    }

    /// A validation error: input understood but rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// An I/O error: a file or stream could not be read or written.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
