use super::list::usage_summary;
use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Display a prompt.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let pd = require_prompt(ctx, id)?;

    let star = if pd.starred { " ★" } else { "" };
    println!("{} {}{}", style("Title:").green().bold(), pd.title, style(star).yellow());
    if !pd.tags.is_empty() {
        println!("{} {}", style("Tags:").green().bold(), pd.tags.join(", "));
    }
    if let Some(folder_id) = &pd.folder_id {
        // A folder that no longer exists reads as unfiled.
        if let Some(folder) = ctx.store.folder(folder_id) {
            println!("{} {}", style("Folder:").green().bold(), folder.name);
        }
    }
    println!(
        "{} {} of {}",
        style("Version:").green().bold(),
        pd.current_version,
        pd.latest_version()
    );
    println!("{} {}", style("Usage:").green().bold(), usage_summary(pd));
    println!("{}", style("Content:").green().bold());
    println!("{}", pd.content);
    Ok(())
}
