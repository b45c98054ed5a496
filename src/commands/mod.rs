use crate::cli::{Cmd, FolderCmd};
use crate::core::model::Prompt;
use crate::core::storage::AppCtx;

pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod feedback;
pub mod folder;
pub mod get;
pub mod history;
pub mod interactive;
pub mod list;
pub mod new;
pub mod rollback;
pub mod search;
pub mod star;
pub mod stats;
pub mod use_prompt;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Cmd, ctx: &mut AppCtx) -> Result<(), String> {
    match command {
        Cmd::List { starred, folder } => list::run(ctx, starred, folder),
        Cmd::Search {
            query,
            starred,
            folder,
        } => search::run(ctx, &query, starred, folder),
        Cmd::New {
            title,
            content,
            tags,
            folder,
            starred,
            prefill,
        } => new::run(
            ctx,
            new::NewArgs {
                title,
                content,
                tags,
                folder,
                starred,
                prefill,
            },
        ),
        Cmd::Get { id } => get::run(ctx, &id),
        Cmd::Edit {
            id,
            content,
            note,
            title,
            tags,
            folder,
            starred,
        } => edit::run(
            ctx,
            &id,
            edit::EditArgs {
                content,
                note,
                title,
                tags,
                folder,
                starred,
            },
        ),
        Cmd::Delete { id } => delete::run(ctx, &id),
        Cmd::Duplicate { id } => duplicate::run(ctx, &id),
        Cmd::Star { id } => star::run(ctx, &id),
        Cmd::Use { id, no_feedback } => use_prompt::run(ctx, &id, !no_feedback),
        Cmd::Feedback { id, helpful, .. } => feedback::run(ctx, &id, helpful),
        Cmd::History { id } => history::run(ctx, &id),
        Cmd::Rollback { id, version } => rollback::run(ctx, &id, version),
        Cmd::Folder(folder_cmd) => match folder_cmd {
            FolderCmd::Add { name } => folder::add(ctx, &name),
            FolderCmd::List => folder::list(ctx),
            FolderCmd::Assign {
                prompt_id,
                folder_id,
            } => folder::assign(ctx, &prompt_id, Some(folder_id)),
            FolderCmd::Unassign { prompt_id } => folder::assign(ctx, &prompt_id, None),
        },
        Cmd::Stats => stats::run(ctx),
        Cmd::Interactive => interactive::run(ctx),
    }
}

/// Look up a prompt or report the unknown ID.
pub(crate) fn require_prompt<'a>(ctx: &'a AppCtx, id: &str) -> Result<&'a Prompt, String> {
    ctx.store
        .prompt(id)
        .ok_or_else(|| format!("No prompt with ID {}", id))
}
