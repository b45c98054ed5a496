use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Duplicate a prompt with fresh counters.
pub fn run(ctx: &mut AppCtx, id: &str) -> Result<(), String> {
    let source = require_prompt(ctx, id)?.clone();
    let copy_id = ctx.store.duplicate_prompt(&source);
    println!(
        "{} prompt {} duplicated as {}",
        style("•").green().bold(),
        id,
        style(copy_id).yellow()
    );
    Ok(())
}
