//! Thread-keyed state registry.
//!
//! Holds one value per thread, keyed by [`ThreadId`], inside a table owned by
//! the process. A value is created the first time its thread touches the
//! registry, and a thread-exit hook releases it when the thread ends.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, ThreadId};

/// Work to run when a thread exits, for as long as its owner is alive.
trait ExitHook {
    /// Whether running the hook could still do anything.
    fn is_live(&self) -> bool;
    fn run(self: Box<Self>);
}

/// Hooks run when the owning thread's locals are destroyed.
#[derive(Default)]
struct ExitHooks {
    hooks: RefCell<Vec<Box<dyn ExitHook>>>,
}

impl Drop for ExitHooks {
    fn drop(&mut self) {
        let hooks = std::mem::take(self.hooks.get_mut());
        for hook in hooks.into_iter().rev() {
            hook.run();
        }
    }
}

thread_local! {
    static EXIT_HOOKS: ExitHooks = ExitHooks::default();
}

/// Register `hook` to run when the current thread exits.
///
/// Hooks whose owner is gone are dropped first, so the list is bounded by
/// the number of live registries this thread has touched. Returns `false`
/// if the thread is already tearing down its locals.
fn on_thread_exit(hook: impl ExitHook + 'static) -> bool {
    EXIT_HOOKS
        .try_with(|exit| {
            let mut hooks = exit.hooks.borrow_mut();
            hooks.retain(|hook| hook.is_live());
            hooks.push(Box::new(hook));
        })
        .is_ok()
}

/// Releases one thread's entry in one registry.
struct ReleaseOnExit<T> {
    registry: Weak<ThreadRegistry<T>>,
    thread: ThreadId,
}

impl<T: Default + Send + 'static> ExitHook for ReleaseOnExit<T> {
    fn is_live(&self) -> bool {
        self.registry.strong_count() > 0
    }

    fn run(self: Box<Self>) {
        ThreadRegistry::release_exited(&self.registry, self.thread);
    }
}

struct Slots<T> {
    states: HashMap<ThreadId, T>,
    /// Threads with an exit hook pointing at this registry.
    hooked: HashSet<ThreadId>,
}

/// A process-owned table of per-thread values.
///
/// Each thread only ever reaches its own entry. The table lock is held for
/// the duration of a closure passed to [`with_current`](Self::with_current),
/// so closures must not re-enter the registry.
pub(crate) struct ThreadRegistry<T> {
    slots: Mutex<Slots<T>>,
}

impl<T: Default + Send + 'static> ThreadRegistry<T> {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            slots: Mutex::new(Slots {
                states: HashMap::new(),
                hooked: HashSet::new(),
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Slots<T>> {
        // A panic inside a closure leaves the table structurally sound
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` on this thread's value, creating it on first use.
    pub(crate) fn with_current<R>(self: &Arc<Self>, f: impl FnOnce(&mut T) -> R) -> R {
        let id = thread::current().id();
        let mut slots = self.lock();

        if !slots.states.contains_key(&id) && slots.hooked.insert(id) {
            let hook = ReleaseOnExit {
                registry: Arc::downgrade(self),
                thread: id,
            };
            if !on_thread_exit(hook) {
                slots.hooked.remove(&id);
                tracing::debug!(thread = ?id, "thread is exiting; state will not be released automatically");
            }
        }

        let state = slots.states.entry(id).or_default();
        f(state)
    }

    /// Run `f` on this thread's value if it exists, without creating one.
    pub(crate) fn with_existing<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let id = thread::current().id();
        let mut slots = self.lock();
        slots.states.get_mut(&id).map(f)
    }

    /// Remove and return this thread's value.
    pub(crate) fn take_current(&self) -> Option<T> {
        let id = thread::current().id();
        self.lock().states.remove(&id)
    }

    /// Number of threads currently holding a value.
    pub(crate) fn len(&self) -> usize {
        self.lock().states.len()
    }

    fn release_exited(registry: &Weak<Self>, id: ThreadId) {
        let Some(registry) = registry.upgrade() else {
            return;
        };
        let released = {
            let mut slots = registry.lock();
            slots.hooked.remove(&id);
            slots.states.remove(&id)
        };
        if released.is_some() {
            tracing::trace!(thread = ?id, "released finder state at thread exit");
        }
        // Dropped outside the lock
        drop(released);
    }
}
