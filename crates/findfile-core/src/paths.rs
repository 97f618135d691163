//! User path normalization.
//!
//! Search locations are matched verbatim, so callers that accept paths from
//! users (CLI flags, config files) normalize them before pushing.

use std::env;
use std::path::PathBuf;

use crate::error::FinderError;

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, FinderError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FinderError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(FinderError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(FinderError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| FinderError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(normalize_user_path("  "), Err(FinderError::EmptyPath)));
    }

    #[test]
    fn test_absolute_path_kept() {
        let path = normalize_user_path(" /usr/share/gdal ").unwrap();
        assert_eq!(path, PathBuf::from("/usr/share/gdal"));
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let path = normalize_user_path("data").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("data"));
    }

    #[test]
    fn test_tilde_expanded() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~").unwrap(), home);
            assert_eq!(normalize_user_path("~/gdal").unwrap(), home.join("gdal"));
        }
    }
}
