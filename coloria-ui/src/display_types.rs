//! Display types for UI components
//!
//! Props-only views of library records so the components never depend on the
//! persistence layer.

use chrono::{DateTime, Utc};
use coloria_common::SortOption;

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryImage {
    pub id: String,
    pub image_url: String,
    pub prompt: String,
    /// Prompt, or `Image <id>` when the prompt is empty
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the library grid and toolbar render.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LibraryPageState {
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub sort: SortOption,
    /// Records in the snapshot before filtering
    pub total_count: usize,
    /// Records matching the search, across all pages
    pub filtered_count: usize,
    /// Cards on the current page
    pub images: Vec<LibraryImage>,
    pub page: usize,
    pub total_pages: usize,
    pub selected_ids: Vec<String>,
    pub processing: bool,
}

impl LibraryPageState {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|s| s == id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Sidebar destinations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Generate,
    Library,
}
