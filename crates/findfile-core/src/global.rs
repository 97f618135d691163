//! Process-wide finder and free-function entry points.
//!
//! Most callers share one finder configured from build-time defaults and
//! `GDAL_DATA`. State is still per thread: each thread that calls these
//! functions gets its own stacks.

use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::FinderConfig;
use crate::finder::FileFinder;
use crate::strategy::{LookupStrategy, SharedStrategy};

static GLOBAL_FINDER: LazyLock<FileFinder> =
    LazyLock::new(|| FileFinder::new(FinderConfig::default()));

/// The shared process-wide finder.
pub fn global() -> &'static FileFinder {
    &GLOBAL_FINDER
}

/// Find `basename` for `class` with the global finder.
pub fn find_file(class: &str, basename: &str) -> Option<PathBuf> {
    GLOBAL_FINDER.find_file(class, basename)
}

/// Run only the default strategy of the global finder.
pub fn default_find_file(class: &str, basename: &str) -> Option<PathBuf> {
    GLOBAL_FINDER.default_find(class, basename)
}

/// Push a strategy onto this thread's global stack.
pub fn push_file_finder(strategy: impl LookupStrategy + 'static) {
    GLOBAL_FINDER.push_strategy(strategy);
}

/// Pop the top strategy from this thread's global stack.
pub fn pop_file_finder() -> Option<SharedStrategy> {
    GLOBAL_FINDER.pop_strategy()
}

/// Push a search location onto this thread's global stack.
pub fn push_finder_location(location: &str) {
    GLOBAL_FINDER.push_location(location);
}

/// Pop the top search location from this thread's global stack.
pub fn pop_finder_location() {
    GLOBAL_FINDER.pop_location();
}

/// Release this thread's global finder state.
pub fn finder_clean() {
    GLOBAL_FINDER.teardown();
}
