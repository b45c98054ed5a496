use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// List versions of a prompt, newest first.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let pd = require_prompt(ctx, id)?;

    if pd.versions.is_empty() {
        println!("{}", style("No version history yet").yellow());
        return Ok(());
    }

    println!("{}", style("Versions:").green().bold());
    for v in pd.versions.iter().rev() {
        let marker = if v.version == pd.current_version {
            style("current").green().bold().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} v{} {} {}",
            style("•").green(),
            v.version,
            style(v.created_at.format("%Y-%m-%d %H:%M")).dim(),
            marker
        );
        if let Some(note) = v.change_note.as_deref().filter(|n| !n.is_empty()) {
            println!("      {}", style(note).italic());
        }
        println!("      {}", v.content.lines().next().unwrap_or(""));
    }
    Ok(())
}
