//! Subcommand definitions.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a data file and print its path
    Find {
        /// Lookup class (e.g. "gdal")
        class: String,
        /// File name to look for
        basename: String,
        /// Extra search directory; repeat to add more, later ones win
        #[arg(short = 'd', long = "dir")]
        dirs: Vec<String>,
    },

    /// Show the search locations for this invocation
    Locations {
        /// Extra search directory; repeat to add more
        #[arg(short = 'd', long = "dir")]
        dirs: Vec<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
