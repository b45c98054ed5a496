use super::list::print_rows;
use crate::api::ViewFilter;
use crate::core::storage::AppCtx;
use console::style;

/// Search prompts by title or tag, optionally narrowed to starred or a folder.
pub fn run(
    ctx: &AppCtx,
    query: &str,
    starred: bool,
    folder: Option<String>,
) -> Result<(), String> {
    let filter = ViewFilter::query(query).starred(starred).in_folder(folder);
    let hits = ctx.store.filtered_prompts(&filter);

    if hits.is_empty() {
        println!("{}", style("No match").yellow());
    } else {
        println!("{}", style("Matches:").green().bold());
        print_rows(ctx, &hits);
    }
    Ok(())
}
