//! Point-in-time view of a thread's finder state.
//!
//! Used for diagnostics and exposed via the `findfile locations` command.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DataDirSource;

/// This thread's finder state, captured in one struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    /// Whether the defaults have been installed on this thread.
    pub initialized: bool,
    /// Search locations in push order (last is searched first).
    pub locations: Vec<String>,
    /// Number of strategies on the stack, default included.
    pub strategy_count: usize,
    /// Name of the data directory environment variable.
    pub data_dir_var: String,
    /// Where the data directory locations come from right now.
    pub data_dir_source: DataDirSource,
}

impl fmt::Display for SearchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initialized = {}", self.initialized)?;
        writeln!(f, "strategy_count = {}", self.strategy_count)?;
        writeln!(f, "data_dir_var = {}", self.data_dir_var)?;
        writeln!(f, "data_dir_source = {}", self.data_dir_source)?;
        // Search order: most recently pushed first
        for (rank, location) in self.locations.iter().rev().enumerate() {
            writeln!(f, "location[{rank}] = {location}")?;
        }
        Ok(())
    }
}
