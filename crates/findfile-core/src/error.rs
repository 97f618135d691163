//! Finder error types.
//!
//! Stack operations themselves never fail from the caller's point of view:
//! a failed push is a silent no-op and a miss is `None`. These errors are
//! reported by the internal push helpers and the path utilities.

use std::fmt;

use thiserror::Error;

/// Which of the two per-thread stacks an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// The lookup strategy stack.
    Strategy,
    /// The search location stack.
    Location,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy => f.write_str("strategy"),
            Self::Location => f.write_str("location"),
        }
    }
}

/// Errors that can occur while maintaining finder state or normalizing paths.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Growing a stack failed; the stack was left untouched.
    #[error("Failed to grow the {stack} stack")]
    AllocationFailed { stack: StackKind },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
