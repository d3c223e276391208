//! Session state
//!
//! The single mutable record of one run: staged files, catalog position,
//! the chosen commit type and message, and the current phase.

use crate::catalog::{CategoryItem, CATALOG};
use crate::git::GitError;
use crate::pager;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The commit was created
    Success,
    /// The user quit before committing
    Cancelled,
    /// git failed to create the commit
    Failed,
}

/// Current step of the interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing a commit type from the catalog
    SelectingCategory,
    /// Typing the commit subject
    EnteringMessage,
    /// Reviewing the final message
    Confirming,
    /// The loop is over
    Terminated(Outcome),
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Terminated(_))
    }
}

/// Mutable state for one run
#[derive(Debug)]
pub struct SessionState {
    pub staged_files: Vec<String>,
    pub catalog: &'static [CategoryItem],
    pub page_size: usize,
    pub current_page: usize,
    /// Index of the highlighted item within the current page
    pub highlight: usize,
    pub selected_category: Option<String>,
    pub draft_message: String,
    pub phase: Phase,
    pub last_error: Option<GitError>,
}

impl SessionState {
    /// Fresh state at the first page with the first item highlighted
    pub fn new(staged_files: Vec<String>, page_size: usize) -> Self {
        Self::with_catalog(staged_files, CATALOG, page_size)
    }

    pub fn with_catalog(
        staged_files: Vec<String>,
        catalog: &'static [CategoryItem],
        page_size: usize,
    ) -> Self {
        Self {
            staged_files,
            catalog,
            page_size: page_size.max(1),
            current_page: 0,
            highlight: 0,
            selected_category: None,
            draft_message: String::new(),
            phase: Phase::SelectingCategory,
            last_error: None,
        }
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.catalog.len(), self.page_size)
    }

    /// Items on the current page
    pub fn page_items(&self) -> &'static [CategoryItem] {
        pager::items_for_page(self.catalog, self.current_page, self.page_size)
    }

    /// The highlighted catalog item, if the page has one
    pub fn highlighted(&self) -> Option<&'static CategoryItem> {
        pager::selected_item(self.page_items(), self.highlight)
    }
}
