//! CLI-specific error types and exit codes.

use findfile_core::FinderError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Nothing matched the lookup.
    #[error("Cannot find {basename} for class {class}")]
    NotFound { class: String, basename: String },

    /// Invalid argument, e.g. an empty `--dir`.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Environment problem such as a missing home or working directory.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: Lookup found nothing
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 74: IO error (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<FinderError> for CliError {
    fn from(err: FinderError) -> Self {
        match err {
            FinderError::EmptyPath => Self::Arguments(err.to_string()),
            FinderError::NoHomeDir
            | FinderError::CurrentDirError(_)
            | FinderError::AllocationFailed { .. } => Self::Io(err.to_string()),
        }
    }
}
