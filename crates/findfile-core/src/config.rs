//! Finder configuration.
//!
//! Describes where the default search locations come from: the data
//! directory environment variable first, the compiled-in install locations
//! otherwise.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the data directory.
pub const DEFAULT_DATA_DIR_VAR: &str = "GDAL_DATA";

/// Lookup class whose misses produce the "data directory undefined" warning.
pub const DEFAULT_WARN_CLASS: &str = "gdal";

/// Location always pushed first at initialization.
pub const CURRENT_DIR_LOCATION: &str = ".";

#[cfg(feature = "macos-framework")]
const PREFIX_DATA_SUFFIX: &str = "Resources/gdal";

#[cfg(not(feature = "macos-framework"))]
const PREFIX_DATA_SUFFIX: &str = "share/gdal";

/// Install locations baked in at build time.
///
/// `FINDFILE_INST_DATA` is used verbatim, `FINDFILE_PREFIX` gets the data
/// suffix appended. Either, both or neither may be present.
pub fn compiled_install_locations() -> Vec<String> {
    let mut locations = Vec::new();

    if let Some(inst_data) = option_env!("FINDFILE_INST_DATA") {
        locations.push(inst_data.to_string());
    }

    if let Some(prefix) = option_env!("FINDFILE_PREFIX") {
        locations.push(format!(
            "{}/{PREFIX_DATA_SUFFIX}",
            prefix.trim_end_matches('/')
        ));
    }

    locations
}

/// How the data directory locations were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataDirSource {
    /// Taken from the data directory environment variable.
    EnvVar,
    /// Compiled-in install locations.
    Install,
    /// Neither the variable nor an install location is available.
    Unset,
}

impl DataDirSource {
    /// Name used in text and JSON output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnvVar => "env_var",
            Self::Install => "install",
            Self::Unset => "unset",
        }
    }
}

impl fmt::Display for DataDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution result for the default data directory locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirResolution {
    /// Locations to push, in push order.
    pub locations: Vec<String>,
    /// Where they came from.
    pub source: DataDirSource,
}

/// Configuration shared by every thread using a [`FileFinder`](crate::FileFinder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Name of the environment variable overriding the data directory.
    pub data_dir_var: String,
    /// Class (compared case-insensitively) that warns when nothing is found.
    pub warn_class: String,
    /// Fallback locations used when the variable is not set.
    pub install_locations: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data_dir_var: DEFAULT_DATA_DIR_VAR.to_string(),
            warn_class: DEFAULT_WARN_CLASS.to_string(),
            install_locations: compiled_install_locations(),
        }
    }
}

impl FinderConfig {
    /// Current value of the data directory variable.
    ///
    /// A variable that is present counts as set, even when empty. Values that
    /// are not valid UTF-8 are converted lossily.
    pub fn data_dir_override(&self) -> Option<String> {
        env::var_os(&self.data_dir_var).map(|value| value.to_string_lossy().into_owned())
    }

    /// Resolve the locations pushed after `"."` at initialization.
    ///
    /// Resolution order:
    /// 1. The data directory environment variable (highest priority)
    /// 2. Compiled-in install locations
    pub fn resolve_data_dirs(&self) -> DataDirResolution {
        if let Some(dir) = self.data_dir_override() {
            return DataDirResolution {
                locations: vec![dir],
                source: DataDirSource::EnvVar,
            };
        }

        if self.install_locations.is_empty() {
            DataDirResolution {
                locations: Vec::new(),
                source: DataDirSource::Unset,
            }
        } else {
            DataDirResolution {
                locations: self.install_locations.clone(),
                source: DataDirSource::Install,
            }
        }
    }

    /// Whether a miss for `class` should warn about the data directory.
    pub(crate) fn warns_for(&self, class: &str) -> bool {
        class.eq_ignore_ascii_case(&self.warn_class) && self.data_dir_override().is_none()
    }
}
