//! Command handlers.
//!
//! Handlers are thin: they take the composed [`CliContext`](crate::CliContext),
//! call into the finder and format the result for the terminal.

pub mod find;
pub mod locations;
