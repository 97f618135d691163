//! Lookup strategies.
//!
//! A strategy maps `(class, basename)` to an optional path. Strategies are
//! stacked per thread; the most recently pushed one is asked first and the
//! default filesystem strategy sits at the bottom.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Weak};

use crate::finder::FinderInner;

/// A pluggable file lookup.
///
/// Any `Fn(&str, &str) -> Option<PathBuf> + Send + Sync` closure is a
/// strategy, so ad-hoc overrides can be pushed without a named type.
pub trait LookupStrategy: Send + Sync {
    /// Look up `basename` for the given `class`.
    ///
    /// Returning `None` passes the request to the next strategy down the stack.
    fn find(&self, class: &str, basename: &str) -> Option<PathBuf>;
}

impl<F> LookupStrategy for F
where
    F: Fn(&str, &str) -> Option<PathBuf> + Send + Sync,
{
    fn find(&self, class: &str, basename: &str) -> Option<PathBuf> {
        self(class, basename)
    }
}

/// A strategy as stored on the stack.
pub type SharedStrategy = Arc<dyn LookupStrategy>;

/// The bottom-of-stack strategy: search the calling thread's locations.
///
/// Holds a weak reference to its finder so the stack does not keep the
/// finder alive. Once the finder is gone it finds nothing.
#[derive(Clone)]
pub struct DefaultStrategy {
    finder: Weak<FinderInner>,
}

impl DefaultStrategy {
    pub(crate) const fn new(finder: Weak<FinderInner>) -> Self {
        Self { finder }
    }
}

impl LookupStrategy for DefaultStrategy {
    fn find(&self, class: &str, basename: &str) -> Option<PathBuf> {
        self.finder.upgrade()?.default_find(class, basename)
    }
}

impl fmt::Debug for DefaultStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultStrategy")
            .field("attached", &(self.finder.strong_count() > 0))
            .finish()
    }
}
