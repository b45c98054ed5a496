//! Derived, filtered view over the prompts of a document.

use crate::core::model::{Document, Prompt};

/// View state chosen by the user. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Case-insensitive substring matched against title or tags.
    pub search_query: String,
    /// Only keep starred prompts.
    pub starred_only: bool,
    /// Exact folder id; `None` or an empty id disables the folder gate.
    pub folder: Option<String>,
}

impl ViewFilter {
    pub fn query(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..Self::default()
        }
    }

    pub fn starred(mut self, starred_only: bool) -> Self {
        self.starred_only = starred_only;
        self
    }

    pub fn in_folder(mut self, folder: Option<String>) -> Self {
        self.folder = folder;
        self
    }

    fn folder_gate(&self) -> Option<&str> {
        self.folder.as_deref().filter(|f| !f.is_empty())
    }
}

/// Prompts of `document` passing all three predicates, in document order.
pub fn filter_prompts<'a>(document: &'a Document, filter: &ViewFilter) -> Vec<&'a Prompt> {
    let needle = filter.search_query.to_lowercase();
    let folder = filter.folder_gate();

    document
        .prompts
        .iter()
        .filter(|p| p.matches_query(&needle))
        .filter(|p| !filter.starred_only || p.starred)
        .filter(|p| folder.map_or(true, |f| p.folder_id.as_deref() == Some(f)))
        .collect()
}
