//! CLI bootstrap - the composition root.
//!
//! Builds the finder from CLI options and pushes the user's `--dir`
//! locations. Handlers only ever see the composed [`CliContext`].

use findfile_core::{FileFinder, FinderConfig, normalize_user_path};
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Finder configuration.
    pub finder: FinderConfig,
    /// Extra locations, pushed in order.
    pub extra_dirs: Vec<String>,
}

impl CliConfig {
    /// Compiled-in defaults with the given data directory variable.
    pub fn with_defaults(data_dir_var: &str) -> Self {
        Self {
            finder: FinderConfig {
                data_dir_var: data_dir_var.to_string(),
                ..FinderConfig::default()
            },
            extra_dirs: Vec::new(),
        }
    }

    /// Add extra search directories.
    #[must_use]
    pub fn with_dirs(mut self, dirs: Vec<String>) -> Self {
        self.extra_dirs = dirs;
        self
    }
}

/// Composed context for command handlers.
#[derive(Debug)]
pub struct CliContext {
    /// The finder, initialized on the current thread.
    pub finder: FileFinder,
}

/// Build the finder and push the normalized extra directories.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let finder = FileFinder::new(config.finder);
    finder.ensure_initialized();

    for raw in &config.extra_dirs {
        let dir = normalize_user_path(raw)?;
        let dir = dir.to_string_lossy();
        if !finder.push_location(&dir) {
            debug!(location = %dir, "location already on the stack");
        }
    }

    Ok(CliContext { finder })
}
