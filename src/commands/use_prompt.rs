use super::require_prompt;
use crate::core::storage::AppCtx;
use console::{style, Term};
use copypasta::{ClipboardContext, ClipboardProvider};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::warn;

/// Use a prompt: count the use, copy its content to the clipboard and print it.
///
/// When `ask_feedback` is set and a terminal is attached, the user is then
/// asked whether the prompt helped.
pub fn run(ctx: &mut AppCtx, id: &str, ask_feedback: bool) -> Result<(), String> {
    let content = require_prompt(ctx, id)?.content.clone();
    ctx.store.increment_use(id);

    match copy_to_clipboard(&content) {
        Ok(()) => println!("{} copied to clipboard", style("•").green().bold()),
        Err(e) => warn!(error = %e, "clipboard unavailable"),
    }
    println!("{}", content);

    if ask_feedback && Term::stdout().is_term() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Was this prompt helpful?")
            .default(0)
            .items(&["Helpful", "Not helpful", "Skip"][..])
            .interact_opt()
            .map_err(|e| e.to_string())?;
        match choice {
            Some(0) => ctx.store.record_feedback(id, true),
            Some(1) => ctx.store.record_feedback(id, false),
            _ => {}
        }
    }
    Ok(())
}

fn copy_to_clipboard(content: &str) -> Result<(), String> {
    let mut clip = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    clip.set_contents(content.to_string())
        .map_err(|e| format!("Clipboard set error: {}", e))
}
