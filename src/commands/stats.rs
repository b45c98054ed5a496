use crate::core::storage::AppCtx;
use console::style;
use std::collections::HashMap;

/// Display statistics about the prompt store.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let prompts = ctx.store.prompts();
    let starred = prompts.iter().filter(|p| p.starred).count();
    let total_uses: u64 = prompts.iter().map(|p| p.use_count).sum();
    let versions: usize = prompts.iter().map(|p| p.versions.len()).sum();

    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    for p in prompts {
        for tag in &p.tags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    println!("{}", style("Prompt Manager Statistics").bold().underlined());
    for (label, value) in [
        ("Total Prompts", prompts.len()),
        ("Starred Prompts", starred),
        ("Folders", ctx.store.folders().len()),
        ("Stored Versions", versions),
    ] {
        println!("{}: {}", style(label).cyan(), style(value).yellow());
    }
    println!("{}: {}", style("Total Uses").cyan(), style(total_uses).yellow());

    let mut most_used: Vec<_> = prompts.iter().filter(|p| p.use_count > 0).collect();
    most_used.sort_by(|a, b| b.use_count.cmp(&a.use_count).then_with(|| a.title.cmp(&b.title)));
    if !most_used.is_empty() {
        println!("\n{}", style("Most Used:").bold().underlined());
        for p in most_used.iter().take(5) {
            println!("  - {} ({} uses)", style(&p.title).green(), p.use_count);
        }
    }

    let mut top_rated: Vec<_> = prompts
        .iter()
        .filter_map(|p| p.helpful_percent().map(|pct| (p, pct)))
        .collect();
    top_rated.sort_by(|(a, pa), (b, pb)| {
        pb.cmp(pa)
            .then_with(|| b.total_feedback().cmp(&a.total_feedback()))
            .then_with(|| a.title.cmp(&b.title))
    });
    if !top_rated.is_empty() {
        println!("\n{}", style("Top Rated:").bold().underlined());
        for (p, pct) in top_rated.iter().take(5) {
            println!(
                "  - {} ({}% helpful, {} votes)",
                style(&p.title).green(),
                pct,
                p.total_feedback()
            );
        }
    }

    if !tag_counts.is_empty() {
        let mut sorted_tags: Vec<_> = tag_counts.into_iter().collect();
        sorted_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        println!("\n{}", style("Top Tags:").bold().underlined());
        for (tag, count) in sorted_tags.iter().take(10) {
            println!("  - {} ({})", style(tag).green(), count);
        }
    }

    Ok(())
}
