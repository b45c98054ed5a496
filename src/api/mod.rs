//! Library API: the prompt store, its derived views and form input.

mod draft;
mod error;
mod filter;
mod store;

pub use draft::{PromptDraft, PromptEdit, PromptPatch, INITIAL_VERSION_NOTE};
pub use error::StoreError;
pub use filter::{filter_prompts, ViewFilter};
pub use store::{PromptStore, COPY_SUFFIX};
