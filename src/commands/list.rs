use crate::api::ViewFilter;
use crate::core::model::Prompt;
use crate::core::storage::AppCtx;
use console::style;

/// List every saved prompt passing the star and folder gates.
pub fn run(ctx: &AppCtx, starred: bool, folder: Option<String>) -> Result<(), String> {
    let filter = ViewFilter::default().starred(starred).in_folder(folder);
    let prompts = ctx.store.filtered_prompts(&filter);

    if prompts.is_empty() {
        println!("{}", style("No saved prompts").green().bold());
    } else {
        println!("{}", style("Saved Prompts:").green().bold());
        print_rows(ctx, &prompts);
    }
    Ok(())
}

/// One line per prompt: star, ID, title, tags, folder and usage.
pub(crate) fn print_rows(ctx: &AppCtx, prompts: &[&Prompt]) {
    for p in prompts {
        let star = if p.starred {
            style("★").yellow().to_string()
        } else {
            style("•").green().to_string()
        };
        let mut line = format!("  {} {} - {}", star, style(&p.id).yellow(), p.title);
        if !p.tags.is_empty() {
            line.push_str(&format!(" {}", style(format!("[{}]", p.tags.join(", "))).dim()));
        }
        if let Some(folder) = p.folder_id.as_deref().and_then(|id| ctx.store.folder(id)) {
            line.push_str(&format!(" {}", style(format!("in {}", folder.name)).cyan()));
        }
        line.push_str(&format!(" {}", style(usage_summary(p)).dim()));
        println!("{}", line);
    }
}

/// "3 uses", "3 uses, 67% helpful".
pub(crate) fn usage_summary(p: &Prompt) -> String {
    let uses = if p.use_count == 1 {
        "1 use".to_string()
    } else {
        format!("{} uses", p.use_count)
    };
    match p.helpful_percent() {
        Some(pct) => format!("({}, {}% helpful)", uses, pct),
        None => format!("({})", uses),
    }
}
