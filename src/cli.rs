//! Defines the command-line interface structure using clap.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-manager", version, about = "Save, search and reuse AI prompts")]
pub struct Cli {
    /// Data directory (defaults to ~/.prompt-manager)
    #[arg(long, global = true, env = "PROMPT_MANAGER_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List saved prompts, most recently added first
    List {
        #[arg(long, help = "Only starred prompts")]
        starred: bool,
        #[arg(long, help = "Only prompts in this folder ID")]
        folder: Option<String>,
    },
    /// Search prompts by title or tag
    Search {
        query: String,
        #[arg(long, help = "Only starred prompts")]
        starred: bool,
        #[arg(long, help = "Only prompts in this folder ID")]
        folder: Option<String>,
    },
    /// Create a new prompt (asks for anything not given as a flag)
    New {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, help = "Comma-separated tags")]
        tags: Option<String>,
        #[arg(long, help = "Folder ID to file the prompt under")]
        folder: Option<String>,
        #[arg(long)]
        starred: bool,
        #[arg(long, help = "Text to pre-fill the content editor with")]
        prefill: Option<String>,
    },
    /// Show a prompt with its usage and rating
    Get { id: String },
    /// Edit a prompt, recording a new version of its content
    Edit {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, help = "What changed in this version")]
        note: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, help = "Comma-separated tags, replacing the current ones")]
        tags: Option<String>,
        #[arg(long, help = "Folder ID, or an empty string for none")]
        folder: Option<String>,
        #[arg(long)]
        starred: Option<bool>,
    },
    /// Delete a prompt by ID
    Delete { id: String },
    /// Duplicate a prompt as "<title> (Copy)"
    Duplicate { id: String },
    /// Star or unstar a prompt
    Star { id: String },
    /// Use a prompt: copy it to the clipboard and count the use
    Use {
        id: String,
        #[arg(long, help = "Do not ask whether the prompt helped")]
        no_feedback: bool,
    },
    /// Rate how well a prompt worked
    #[command(group(ArgGroup::new("rating").required(true).args(["helpful", "unhelpful"])))]
    Feedback {
        id: String,
        #[arg(long)]
        helpful: bool,
        #[arg(long)]
        unhelpful: bool,
    },
    /// Show a prompt's version history
    History { id: String },
    /// Make an earlier version of a prompt current again
    Rollback { id: String, version: u32 },
    /// Manage folders
    #[command(subcommand)]
    Folder(FolderCmd),
    /// Show store statistics
    Stats,
    /// Start an interactive session (REPL)
    Interactive,
}

#[derive(Subcommand)]
pub enum FolderCmd {
    /// Create a folder
    Add { name: String },
    /// List folders with their prompt counts
    List,
    /// File a prompt under a folder
    Assign { prompt_id: String, folder_id: String },
    /// Remove a prompt from its folder
    Unassign { prompt_id: String },
}
