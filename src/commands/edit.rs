use super::new::pick_folder;
use super::require_prompt;
use crate::api::PromptEdit;
use crate::core::storage::AppCtx;
use console::style;
use dialoguer::{theme::ColorfulTheme, Editor, Input};

/// Fields of `edit` given on the command line.
#[derive(Default)]
pub struct EditArgs {
    pub content: Option<String>,
    pub note: Option<String>,
    pub title: Option<String>,
    pub tags: Option<String>,
    pub folder: Option<String>,
    pub starred: Option<bool>,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.note.is_none()
            && self.title.is_none()
            && self.tags.is_none()
            && self.folder.is_none()
            && self.starred.is_none()
    }
}

/// Edit a prompt. The content is saved as a new version, then the metadata
/// is updated.
pub fn run(ctx: &mut AppCtx, id: &str, args: EditArgs) -> Result<(), String> {
    let prompt = require_prompt(ctx, id)?.clone();
    let original = PromptEdit::from_prompt(&prompt);

    let edit = if args.is_empty() {
        ask_edit(ctx, original)?
    } else {
        PromptEdit {
            content: args.content.unwrap_or(original.content),
            change_note: args.note,
            title: args.title.unwrap_or(original.title),
            tags: args.tags.unwrap_or(original.tags),
            starred: args.starred.unwrap_or(original.starred),
            folder_id: match args.folder {
                Some(f) if f.is_empty() => None,
                Some(f) => Some(f),
                None => original.folder_id,
            },
        }
    };
    edit.validate().map_err(|e| e.to_string())?;
    if let Some(f) = edit.folder_id.as_deref() {
        if edit.folder_id != prompt.folder_id && ctx.store.folder(f).is_none() {
            return Err(format!("No folder with ID {}", f));
        }
    }

    if edit.is_noop_for(&prompt) {
        println!(
            "{}",
            style("No changes detected. Nothing to save.").yellow()
        );
        return Ok(());
    }

    ctx.store.apply_edit(id, &edit);
    let version = ctx
        .store
        .prompt(id)
        .map(|p| p.current_version)
        .unwrap_or_default();
    println!(
        "{} Prompt '{}' updated (version {}).",
        style("✔").green().bold(),
        id,
        version
    );
    Ok(())
}

fn ask_edit(ctx: &AppCtx, mut edit: PromptEdit) -> Result<PromptEdit, String> {
    let theme = ColorfulTheme::default();

    edit.content = Editor::new()
        .edit(&edit.content)
        .map_err(|e| format!("Editor error: {}", e))?
        .unwrap_or(edit.content);

    let note: String = Input::with_theme(&theme)
        .with_prompt("Change note (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Input error: {}", e))?;
    edit.change_note = Some(note).filter(|n| !n.trim().is_empty());

    edit.title = Input::with_theme(&theme)
        .with_prompt("Title")
        .with_initial_text(edit.title.clone())
        .interact_text()
        .map_err(|e| format!("Title error: {}", e))?;

    edit.tags = Input::with_theme(&theme)
        .with_prompt("Tags (comma‑separated, optional)")
        .with_initial_text(edit.tags.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| format!("Tags error: {}", e))?;

    if !ctx.store.folders().is_empty() {
        edit.folder_id = pick_folder(ctx, &theme)?;
    }
    Ok(edit)
}
