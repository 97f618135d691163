#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod finder;
pub mod global;
pub mod guard;
pub mod paths;
pub mod probe;
pub mod snapshot;
pub mod strategy;

mod registry;
mod state;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use config::{
    CURRENT_DIR_LOCATION, DEFAULT_DATA_DIR_VAR, DEFAULT_WARN_CLASS, DataDirResolution,
    DataDirSource, FinderConfig, compiled_install_locations,
};
pub use error::{FinderError, StackKind};
pub use finder::FileFinder;
pub use global::{
    default_find_file, find_file, finder_clean, global, pop_file_finder, pop_finder_location,
    push_file_finder, push_finder_location,
};
pub use guard::{LocationGuard, StrategyGuard};
pub use paths::normalize_user_path;
pub use probe::{ExistenceProbe, LocalFilesystem};
pub use snapshot::SearchSnapshot;
pub use strategy::{DefaultStrategy, LookupStrategy, SharedStrategy};
