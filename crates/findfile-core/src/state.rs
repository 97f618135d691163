//! Per-thread resolver state: the strategy and location stacks.

use std::fmt;
use std::sync::Arc;

use crate::error::{FinderError, StackKind};
use crate::strategy::SharedStrategy;

/// One thread's finder state.
///
/// Both stacks are kept in push order; the top of each stack is the last
/// element. Locations are unique, strategies are not.
#[derive(Default)]
pub(crate) struct FinderState {
    initialized: bool,
    strategies: Vec<SharedStrategy>,
    locations: Vec<String>,
}

impl FinderState {
    pub(crate) const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) const fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub(crate) fn locations(&self) -> &[String] {
        &self.locations
    }

    pub(crate) fn strategy_count(&self) -> usize {
        self.strategies.len()
    }

    /// Strategies ordered from top of stack to bottom.
    pub(crate) fn strategies_top_down(&self) -> Vec<SharedStrategy> {
        self.strategies.iter().rev().cloned().collect()
    }

    pub(crate) fn push_strategy(&mut self, strategy: SharedStrategy) -> Result<(), FinderError> {
        self.strategies
            .try_reserve(1)
            .map_err(|_| FinderError::AllocationFailed {
                stack: StackKind::Strategy,
            })?;
        self.strategies.push(strategy);
        Ok(())
    }

    pub(crate) fn pop_strategy(&mut self) -> Option<SharedStrategy> {
        let top = self.strategies.pop();
        if self.strategies.is_empty() {
            self.strategies.shrink_to_fit();
        }
        top
    }

    /// Remove the most recent occurrence of `strategy`, wherever it sits.
    pub(crate) fn remove_strategy(&mut self, strategy: &SharedStrategy) -> bool {
        let Some(index) = self
            .strategies
            .iter()
            .rposition(|candidate| Arc::ptr_eq(candidate, strategy))
        else {
            return false;
        };
        self.strategies.remove(index);
        if self.strategies.is_empty() {
            self.strategies.shrink_to_fit();
        }
        true
    }

    /// Push `location` unless it is already on the stack.
    ///
    /// Returns `Ok(false)` for a duplicate.
    pub(crate) fn push_location(&mut self, location: &str) -> Result<bool, FinderError> {
        if self.locations.iter().any(|existing| existing == location) {
            return Ok(false);
        }
        self.locations
            .try_reserve(1)
            .map_err(|_| FinderError::AllocationFailed {
                stack: StackKind::Location,
            })?;
        self.locations.push(location.to_owned());
        Ok(true)
    }

    pub(crate) fn pop_location(&mut self) -> Option<String> {
        let top = self.locations.pop();
        if self.locations.is_empty() {
            self.locations.shrink_to_fit();
        }
        top
    }

    pub(crate) fn remove_location(&mut self, location: &str) -> bool {
        let Some(index) = self.locations.iter().rposition(|l| l == location) else {
            return false;
        };
        self.locations.remove(index);
        if self.locations.is_empty() {
            self.locations.shrink_to_fit();
        }
        true
    }

    /// Pop every location, then every strategy, and clear the flag.
    pub(crate) fn clear(&mut self) {
        while self.pop_location().is_some() {}
        while self.pop_strategy().is_some() {}
        self.initialized = false;
    }
}

impl fmt::Debug for FinderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinderState")
            .field("initialized", &self.initialized)
            .field("strategies", &self.strategies.len())
            .field("locations", &self.locations)
            .finish()
    }
}
