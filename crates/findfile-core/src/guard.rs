//! RAII guards for scoped overrides.
//!
//! A guard removes what it pushed when dropped, so a caller can layer a
//! location or a strategy over the defaults for the duration of a scope.

use std::marker::PhantomData;

use crate::finder::FileFinder;
use crate::strategy::SharedStrategy;

/// Removes a scoped location when dropped.
///
/// Returned by [`FileFinder::scoped_location`]. Bound to the thread that
/// created it, since the location lives on that thread's stack.
///
/// # Example
///
/// ```
/// use findfile_core::{FileFinder, FinderConfig};
///
/// let finder = FileFinder::new(FinderConfig::default());
/// {
///     let _dir = finder.scoped_location("/opt/app/data");
///     assert!(finder.locations().contains(&"/opt/app/data".to_string()));
/// }
/// assert!(!finder.locations().contains(&"/opt/app/data".to_string()));
/// ```
#[must_use = "the location is removed as soon as the guard is dropped"]
pub struct LocationGuard<'a> {
    finder: &'a FileFinder,
    location: String,
    pushed: bool,
    _not_send: PhantomData<*const ()>,
}

impl<'a> LocationGuard<'a> {
    pub(crate) const fn new(finder: &'a FileFinder, location: String, pushed: bool) -> Self {
        Self {
            finder,
            location,
            pushed,
            _not_send: PhantomData,
        }
    }

    /// Whether the guard actually added the location.
    ///
    /// `false` when it was already on the stack; dropping the guard then
    /// leaves it alone.
    pub const fn pushed(&self) -> bool {
        self.pushed
    }
}

impl Drop for LocationGuard<'_> {
    fn drop(&mut self) {
        if self.pushed {
            self.finder.remove_location(&self.location);
        }
    }
}

/// Removes a scoped strategy when dropped.
///
/// Returned by [`FileFinder::scoped_strategy`]. If the same strategy was
/// pushed again in the meantime only the most recent copy is removed.
#[must_use = "the strategy is removed as soon as the guard is dropped"]
pub struct StrategyGuard<'a> {
    finder: &'a FileFinder,
    strategy: SharedStrategy,
    _not_send: PhantomData<*const ()>,
}

impl<'a> StrategyGuard<'a> {
    pub(crate) const fn new(finder: &'a FileFinder, strategy: SharedStrategy) -> Self {
        Self {
            finder,
            strategy,
            _not_send: PhantomData,
        }
    }
}

impl Drop for StrategyGuard<'_> {
    fn drop(&mut self) {
        self.finder.remove_strategy(&self.strategy);
    }
}
