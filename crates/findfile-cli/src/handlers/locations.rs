//! Locations command handler.
//!
//! Shows what a lookup on this thread would search, in `key = value` form
//! or as JSON.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Render the current search state.
pub fn render(ctx: &CliContext, json: bool) -> Result<String> {
    let snapshot = ctx.finder.snapshot();
    if json {
        Ok(serde_json::to_string_pretty(&snapshot)?)
    } else {
        Ok(snapshot.to_string())
    }
}

/// Execute the locations command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let output = render(ctx, json)?;
    println!("{}", output.trim_end());
    Ok(())
}
