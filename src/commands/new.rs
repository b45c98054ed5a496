use crate::api::PromptDraft;
use crate::core::storage::AppCtx;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};

/// Fields of `new` given on the command line.
#[derive(Default)]
pub struct NewArgs {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub folder: Option<String>,
    pub starred: bool,
    pub prefill: Option<String>,
}

/// Create a new prompt. Missing title or content switches to interactive input.
pub fn run(ctx: &mut AppCtx, args: NewArgs) -> Result<(), String> {
    let draft = if args.title.is_some() && args.content.is_some() {
        PromptDraft {
            title: args.title.unwrap_or_default(),
            content: args.content.unwrap_or_default(),
            tags: args.tags.unwrap_or_default(),
            starred: args.starred,
            folder_id: args.folder,
        }
    } else {
        ask_draft(ctx, args)?
    };

    if let Some(folder) = draft.folder_id.as_deref().filter(|f| !f.is_empty()) {
        if ctx.store.folder(folder).is_none() {
            return Err(format!("No folder with ID {}", folder));
        }
    }

    let id = ctx.store.fresh_prompt_id();
    let prompt = draft.into_prompt(id).map_err(|e| e.to_string())?;
    let (id, title) = (prompt.id.clone(), prompt.title.clone());
    ctx.store.add_prompt(prompt);

    println!(
        "{} Prompt saved with ID {} and title '{}'",
        style("•").green().bold(),
        style(&id).yellow(),
        title
    );
    Ok(())
}

fn ask_draft(ctx: &AppCtx, args: NewArgs) -> Result<PromptDraft, String> {
    let theme = ColorfulTheme::default();

    let title = match args.title {
        Some(t) => t,
        None => Input::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()
            .map_err(|e| format!("Title error: {}", e))?,
    };
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }

    let tags = match args.tags {
        Some(t) => t,
        None => Input::with_theme(&theme)
            .with_prompt("Tags (comma‑separated, optional)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Tags error: {}", e))?,
    };

    let content = match args.content {
        Some(c) => c,
        None => {
            let seed = args
                .prefill
                .unwrap_or_else(|| "Enter your prompt content here.".to_string());
            Editor::new()
                .edit(&seed)
                .map_err(|e| format!("Editor error: {}", e))?
                .unwrap_or_default()
        }
    };

    let folder_id = match args.folder {
        Some(f) => Some(f),
        None => pick_folder(ctx, &theme)?,
    };

    let starred = args.starred
        || Confirm::with_theme(&theme)
            .with_prompt("Star this prompt?")
            .default(false)
            .interact()
            .unwrap_or(false);

    Ok(PromptDraft {
        title,
        content,
        tags,
        starred,
        folder_id,
    })
}

/// Let the user file the prompt under an existing folder, if there are any.
pub(crate) fn pick_folder(ctx: &AppCtx, theme: &ColorfulTheme) -> Result<Option<String>, String> {
    let folders = ctx.store.folders();
    if folders.is_empty() {
        return Ok(None);
    }

    let mut items = vec!["No folder".to_string()];
    items.extend(folders.iter().map(|f| f.name.clone()));
    let choice = Select::with_theme(theme)
        .with_prompt("Folder")
        .default(0)
        .items(&items[..])
        .interact()
        .map_err(|e| e.to_string())?;

    Ok(choice.checked_sub(1).map(|i| folders[i].id.clone()))
}
