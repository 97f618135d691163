//! Existence probe port.
//!
//! The default strategy only needs to know whether a joined path exists.
//! This port abstracts that check so the finder can be pointed at something
//! other than the local filesystem (an in-memory tree, a test fixture).

use std::path::Path;

/// Port for the stat-like existence check used by the default strategy.
///
/// Implementations must not validate content: a regular file or a
/// directory both count as existing.
#[cfg_attr(test, mockall::automock)]
pub trait ExistenceProbe: Send + Sync {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the local filesystem.
///
/// Uses [`Path::exists`], which follows symlinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl ExistenceProbe for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> ExistenceProbe for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}
