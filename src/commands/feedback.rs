use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Record whether a prompt helped.
pub fn run(ctx: &mut AppCtx, id: &str, helpful: bool) -> Result<(), String> {
    require_prompt(ctx, id)?;
    ctx.store.record_feedback(id, helpful);
    let pct = ctx
        .store
        .prompt(id)
        .and_then(|p| p.helpful_percent())
        .unwrap_or_default();
    println!(
        "{} feedback recorded, {}% helpful",
        style("•").green().bold(),
        pct
    );
    Ok(())
}
