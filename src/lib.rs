pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{PromptDraft, PromptEdit, PromptPatch, PromptStore, StoreError, ViewFilter};
pub use crate::core::model::{Document, Folder, Prompt, Version};
pub use crate::core::persist::{FileBackend, JsonAdapter, KvBackend, MemoryBackend, Persistence};
