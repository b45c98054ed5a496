use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Make an earlier version current. Later versions stay in the history.
pub fn run(ctx: &mut AppCtx, id: &str, version: u32) -> Result<(), String> {
    let pd = require_prompt(ctx, id)?;
    if pd.version(version).is_none() {
        return Err(format!("Prompt {} has no version {}", id, version));
    }
    ctx.store.rollback_version(id, version);
    println!(
        "{} {} restored to version {}",
        style("•").green().bold(),
        id,
        version
    );
    Ok(())
}
