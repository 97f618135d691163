//! Test utilities for finder tests.
//!
//! Provides environment variable isolation and a tracing layer that records
//! warnings so tests can assert on the "data directory undefined" advisory.

use std::env;
use std::sync::Mutex;

use crate::config::FinderConfig;

mod warnings;

pub use warnings::capture_warnings;

/// Shared lock to serialize tests that set environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}

/// Config with a test-specific variable name and explicit install locations.
pub fn test_config(data_dir_var: &str, install: &[&str]) -> FinderConfig {
    FinderConfig {
        data_dir_var: data_dir_var.to_string(),
        install_locations: install.iter().map(ToString::to_string).collect(),
        ..FinderConfig::default()
    }
}
