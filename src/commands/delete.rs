use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Delete a prompt.
pub fn run(ctx: &mut AppCtx, id: &str) -> Result<(), String> {
    require_prompt(ctx, id)?;
    ctx.store.delete_prompt(id);
    println!("{} prompt {} deleted", style("•").green().bold(), id);
    Ok(())
}
