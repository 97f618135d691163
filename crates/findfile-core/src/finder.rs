//! The file finder: per-thread strategy and location stacks.
//!
//! # Design
//!
//! - State lives in a [`ThreadRegistry`] keyed by thread id; every operation
//!   on a thread only touches that thread's stacks
//! - The first operation on a thread installs the default strategy, `"."`,
//!   and the data directory locations
//! - Strategies run without the registry lock held, so a strategy may call
//!   back into the finder

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::{CURRENT_DIR_LOCATION, FinderConfig};
use crate::guard::{LocationGuard, StrategyGuard};
use crate::probe::{ExistenceProbe, LocalFilesystem};
use crate::registry::ThreadRegistry;
use crate::snapshot::SearchSnapshot;
use crate::state::FinderState;
use crate::strategy::{DefaultStrategy, LookupStrategy, SharedStrategy};

pub(crate) struct FinderInner {
    config: FinderConfig,
    probe: Box<dyn ExistenceProbe>,
    registry: Arc<ThreadRegistry<FinderState>>,
    default_strategy: SharedStrategy,
}

impl FinderInner {
    /// Search this thread's locations, most recently pushed first.
    pub(crate) fn default_find(&self, class: &str, basename: &str) -> Option<PathBuf> {
        let locations = self
            .registry
            .with_existing(|state| state.locations().to_vec())
            .unwrap_or_default();

        for location in locations.iter().rev() {
            let candidate = candidate_path(location, basename);
            if self.probe.exists(&candidate) {
                trace!(class, basename, path = %candidate.display(), "found file");
                return Some(candidate);
            }
        }

        if self.config.warns_for(class) {
            warn!(
                "Cannot find {} ({} is not defined)",
                basename, self.config.data_dir_var
            );
        }

        None
    }
}

/// `basename` under `location`.
///
/// Leading separators are stripped so an absolute basename still lands
/// inside the location instead of replacing it.
fn candidate_path(location: &str, basename: &str) -> PathBuf {
    Path::new(location).join(basename.trim_start_matches(std::path::is_separator))
}

/// Resolves data files through a stack of lookup strategies.
///
/// Cloning is cheap and clones share state: a thread sees the same stacks
/// through every clone of the same finder.
#[derive(Clone)]
pub struct FileFinder {
    inner: Arc<FinderInner>,
}

impl FileFinder {
    /// Create a finder that checks the local filesystem.
    pub fn new(config: FinderConfig) -> Self {
        Self::with_probe(config, LocalFilesystem)
    }

    /// Create a finder with a custom existence check.
    pub fn with_probe(config: FinderConfig, probe: impl ExistenceProbe + 'static) -> Self {
        let inner = Arc::new_cyclic(|weak| FinderInner {
            config,
            probe: Box::new(probe),
            registry: ThreadRegistry::new(),
            default_strategy: Arc::new(DefaultStrategy::new(weak.clone())),
        });
        Self { inner }
    }

    /// The configuration this finder was built with.
    pub fn config(&self) -> &FinderConfig {
        &self.inner.config
    }

    /// The strategy installed at the bottom of every thread's stack.
    pub fn default_strategy(&self) -> SharedStrategy {
        Arc::clone(&self.inner.default_strategy)
    }

    fn with_initialized<R>(&self, f: impl FnOnce(&mut FinderState) -> R) -> R {
        self.inner.registry.with_current(|state| {
            if !state.is_initialized() {
                self.populate(state);
            }
            f(state)
        })
    }

    fn populate(&self, state: &mut FinderState) {
        state.mark_initialized();

        if let Err(e) = state.push_strategy(self.default_strategy()) {
            debug!(error = %e, "could not install default strategy");
        }

        let resolution = self.inner.config.resolve_data_dirs();
        let defaults = std::iter::once(CURRENT_DIR_LOCATION)
            .chain(resolution.locations.iter().map(String::as_str));
        for location in defaults {
            if let Err(e) = state.push_location(location) {
                debug!(error = %e, location, "could not push default location");
            }
        }

        debug!(
            source = ?resolution.source,
            locations = ?state.locations(),
            "initialized file finder for thread"
        );
    }

    /// Make sure this thread's stacks exist and hold the defaults.
    ///
    /// Does nothing if the thread is already initialized.
    pub fn ensure_initialized(&self) {
        self.with_initialized(|_| ());
    }

    /// Release this thread's stacks.
    ///
    /// Every location and strategy is popped and the state is dropped. The
    /// next operation on this thread starts from scratch. Safe to call when
    /// the thread has no state.
    pub fn teardown(&self) {
        if let Some(mut state) = self.inner.registry.take_current() {
            state.clear();
            trace!("tore down file finder state");
        }
    }

    /// Push a strategy on top of this thread's stack.
    ///
    /// The same strategy may be pushed more than once.
    pub fn push_strategy(&self, strategy: impl LookupStrategy + 'static) {
        self.push_shared_strategy(Arc::new(strategy));
    }

    /// Push an already shared strategy, e.g. one returned by [`pop_strategy`](Self::pop_strategy).
    pub fn push_shared_strategy(&self, strategy: SharedStrategy) {
        self.with_initialized(|state| {
            if let Err(e) = state.push_strategy(strategy) {
                debug!(error = %e, "strategy push dropped");
            }
        });
    }

    /// Pop the top strategy, or `None` if the stack is empty.
    pub fn pop_strategy(&self) -> Option<SharedStrategy> {
        self.with_initialized(FinderState::pop_strategy)
    }

    /// Push a search location unless it is already on this thread's stack.
    ///
    /// Returns whether the location was added.
    pub fn push_location(&self, location: &str) -> bool {
        self.with_initialized(|state| match state.push_location(location) {
            Ok(added) => {
                trace!(location, added, "push location");
                added
            }
            Err(e) => {
                debug!(error = %e, location, "location push dropped");
                false
            }
        })
    }

    /// Pop the top search location, if any.
    pub fn pop_location(&self) -> Option<String> {
        self.with_initialized(FinderState::pop_location)
    }

    /// Find `basename` for `class`.
    ///
    /// Strategies are asked from the most recently pushed down to the default
    /// strategy; the first hit wins. The default strategy always treats
    /// `basename` as relative to each location, so `"/gcs.csv"` is looked up
    /// as `<location>/gcs.csv`.
    pub fn find_file(&self, class: &str, basename: &str) -> Option<PathBuf> {
        let strategies = self.with_initialized(|state| state.strategies_top_down());
        strategies
            .iter()
            .find_map(|strategy| strategy.find(class, basename))
    }

    /// Run only the default strategy against this thread's locations.
    ///
    /// Does not initialize the thread.
    pub fn default_find(&self, class: &str, basename: &str) -> Option<PathBuf> {
        self.inner.default_find(class, basename)
    }

    /// This thread's locations in push order.
    pub fn locations(&self) -> Vec<String> {
        self.with_initialized(|state| state.locations().to_vec())
    }

    /// Number of strategies on this thread's stack.
    pub fn strategy_count(&self) -> usize {
        self.with_initialized(|state| state.strategy_count())
    }

    /// Describe this thread's state without initializing it.
    pub fn snapshot(&self) -> SearchSnapshot {
        let (initialized, locations, strategy_count) = self
            .inner
            .registry
            .with_existing(|state| {
                (
                    state.is_initialized(),
                    state.locations().to_vec(),
                    state.strategy_count(),
                )
            })
            .unwrap_or_default();

        SearchSnapshot {
            initialized,
            locations,
            strategy_count,
            data_dir_var: self.inner.config.data_dir_var.clone(),
            data_dir_source: self.inner.config.resolve_data_dirs().source,
        }
    }

    /// Number of threads that currently hold state in this finder.
    pub fn active_threads(&self) -> usize {
        self.inner.registry.len()
    }

    /// Push a location that is popped again when the guard drops.
    ///
    /// If the location was already present the guard leaves it in place.
    pub fn scoped_location(&self, location: &str) -> LocationGuard<'_> {
        let pushed = self.push_location(location);
        LocationGuard::new(self, location.to_owned(), pushed)
    }

    /// Push a strategy that is removed again when the guard drops.
    pub fn scoped_strategy(&self, strategy: impl LookupStrategy + 'static) -> StrategyGuard<'_> {
        let strategy: SharedStrategy = Arc::new(strategy);
        self.push_shared_strategy(Arc::clone(&strategy));
        StrategyGuard::new(self, strategy)
    }

    pub(crate) fn remove_location(&self, location: &str) -> bool {
        self.inner
            .registry
            .with_existing(|state| state.remove_location(location))
            .unwrap_or(false)
    }

    pub(crate) fn remove_strategy(&self, strategy: &SharedStrategy) -> bool {
        self.inner
            .registry
            .with_existing(|state| state.remove_strategy(strategy))
            .unwrap_or(false)
    }
}

impl Default for FileFinder {
    fn default() -> Self {
        Self::new(FinderConfig::default())
    }
}

impl fmt::Debug for FileFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFinder")
            .field("config", &self.inner.config)
            .field("active_threads", &self.active_threads())
            .finish_non_exhaustive()
    }
}
