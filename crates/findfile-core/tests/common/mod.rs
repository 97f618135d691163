//! Common test utilities.
//!
//! Fixture finders backed by an in-memory file set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use findfile_core::{FileFinder, FinderConfig};

/// A variable name no test ever sets.
pub const UNSET_VAR: &str = "FINDFILE_IT_DATA_NEVER_SET";

/// Config with no environment override and no install locations.
pub fn bare_config() -> FinderConfig {
    FinderConfig {
        data_dir_var: UNSET_VAR.to_string(),
        install_locations: Vec::new(),
        ..FinderConfig::default()
    }
}

/// Finder whose filesystem consists of exactly `files`.
pub fn finder_over(config: FinderConfig, files: &[&str]) -> FileFinder {
    let existing: HashSet<PathBuf> = files.iter().map(PathBuf::from).collect();
    FileFinder::with_probe(config, move |path: &Path| existing.contains(path))
}
