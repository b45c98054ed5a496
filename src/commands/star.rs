use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Toggle a prompt's star.
pub fn run(ctx: &mut AppCtx, id: &str) -> Result<(), String> {
    require_prompt(ctx, id)?;
    ctx.store.toggle_star(id);
    let starred = ctx.store.prompt(id).is_some_and(|p| p.starred);
    let what = if starred { "starred" } else { "unstarred" };
    println!("{} prompt {} {}", style("•").green().bold(), id, what);
    Ok(())
}
