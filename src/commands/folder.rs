use super::require_prompt;
use crate::core::storage::AppCtx;
use console::style;

/// Create a folder.
pub fn add(ctx: &mut AppCtx, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Folder name cannot be empty".to_string());
    }
    let id = ctx.store.add_folder(name.trim());
    println!(
        "{} folder '{}' created with ID {}",
        style("•").green().bold(),
        name.trim(),
        style(id).yellow()
    );
    Ok(())
}

/// List folders and how many prompts each holds.
pub fn list(ctx: &AppCtx) -> Result<(), String> {
    let folders = ctx.store.folders();
    if folders.is_empty() {
        println!("{}", style("No folders").green().bold());
        return Ok(());
    }

    println!("{}", style("Folders:").green().bold());
    for f in folders {
        let count = ctx
            .store
            .prompts()
            .iter()
            .filter(|p| p.folder_id.as_deref() == Some(f.id.as_str()))
            .count();
        println!(
            "  {} {} - {} {}",
            style("•").green(),
            style(&f.id).yellow(),
            f.name,
            style(format!("({})", count)).dim()
        );
    }
    Ok(())
}

/// File a prompt under a folder, or take it out of its folder with `None`.
pub fn assign(ctx: &mut AppCtx, prompt_id: &str, folder_id: Option<String>) -> Result<(), String> {
    require_prompt(ctx, prompt_id)?;
    if let Some(f) = &folder_id {
        if ctx.store.folder(f).is_none() {
            return Err(format!("No folder with ID {}", f));
        }
    }

    let message = match &folder_id {
        Some(f) => format!("prompt {} moved to folder {}", prompt_id, f),
        None => format!("prompt {} removed from its folder", prompt_id),
    };
    ctx.store.assign_to_folder(prompt_id, folder_id);
    println!("{} {}", style("•").green().bold(), message);
    Ok(())
}
