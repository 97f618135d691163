//! Find command handler.

use std::path::PathBuf;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Resolve `basename` for `class`.
pub fn resolve(ctx: &CliContext, class: &str, basename: &str) -> Result<PathBuf, CliError> {
    ctx.finder
        .find_file(class, basename)
        .ok_or_else(|| CliError::NotFound {
            class: class.to_string(),
            basename: basename.to_string(),
        })
}

/// Execute the find command, printing the resolved path.
pub fn execute(ctx: &CliContext, class: &str, basename: &str) -> Result<(), CliError> {
    let path = resolve(ctx, class, basename)?;
    println!("{}", path.display());
    Ok(())
}
