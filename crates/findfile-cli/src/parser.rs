//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the data-file finder.
#[derive(Parser)]
#[command(name = "findfile")]
#[command(about = "Locate data files through layered search locations")]
#[command(version)]
pub struct Cli {
    /// Environment variable that overrides the data directory
    #[arg(long = "data-dir-var", global = true, default_value = findfile_core::DEFAULT_DATA_DIR_VAR)]
    pub data_dir_var: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
