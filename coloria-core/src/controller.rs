//! Library view state.
//!
//! The controller owns the last fetched snapshot and the view parameters
//! (sort, search text, page, page size, selection, viewer). The filtered and
//! paginated views are derived on every read.

use crate::bulk::BulkDownload;
use crate::error::LibraryError;
use crate::gateway::ImageGateway;
use crate::models::SavedImageRecord;
use coloria_common::{
    clamp_page, filter_items, items_per_page, paginate, total_pages, Generation, RequestGuard,
    Selection, SortOption, ViewerCommand, ViewerState, DEFAULT_VIEWPORT_WIDTH,
};
use tracing::{debug, error};

pub const LOAD_FAILED: &str = "Failed to load images. Please try again later.";
pub const NOTHING_DOWNLOADED: &str = "None of the selected images could be downloaded.";

/// Fetch the owner's active records in `sort` order.
pub async fn fetch_snapshot<G>(
    gateway: &G,
    owner_id: &str,
    sort: SortOption,
) -> Result<Vec<SavedImageRecord>, LibraryError>
where
    G: ImageGateway + ?Sized,
{
    let (field, direction) = sort.field_and_direction();
    gateway
        .list_active(owner_id, field, direction)
        .await
        .map_err(|e| {
            error!("Failed to load library: {}", e);
            LibraryError::Transport(LOAD_FAILED.to_string())
        })
}

#[derive(Debug, Clone)]
pub struct LibraryController {
    snapshot: Vec<SavedImageRecord>,
    sort: SortOption,
    query: String,
    page: usize,
    page_size: usize,
    selection: Selection,
    viewer: ViewerState,
    loads: RequestGuard,
    loading: bool,
    processing: bool,
    confirm_delete: bool,
    error: Option<String>,
}

impl Default for LibraryController {
    fn default() -> Self {
        Self::new(items_per_page(DEFAULT_VIEWPORT_WIDTH))
    }
}

impl LibraryController {
    pub fn new(page_size: usize) -> Self {
        Self {
            snapshot: Vec::new(),
            sort: SortOption::default(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
            viewer: ViewerState::new(),
            loads: RequestGuard::new(),
            loading: false,
            processing: false,
            confirm_delete: false,
            error: None,
        }
    }

    // Loading

    /// Start a load. The returned generation must be passed to `finish_load`.
    pub fn begin_load(&mut self) -> Generation {
        self.loading = true;
        self.error = None;
        self.loads.begin()
    }

    /// Apply a load result. Results from superseded loads are dropped and
    /// `false` is returned.
    pub fn finish_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<SavedImageRecord>, LibraryError>,
    ) -> bool {
        if !self.loads.is_current(generation) {
            debug!("Dropping stale library load {:?}", generation);
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.snapshot = records;
                self.page = 1;
                let gone: Vec<String> = self
                    .selection
                    .iter()
                    .filter(|id| !self.snapshot.iter().any(|r| r.id == *id))
                    .map(str::to_string)
                    .collect();
                self.selection.remove_all(gone.iter().map(String::as_str));
                self.viewer.clamp_to(self.filtered_len());
            }
            Err(e) => self.error = Some(e.message().to_string()),
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn snapshot(&self) -> &[SavedImageRecord] {
        &self.snapshot
    }

    // Sort, search, pages

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Change the sort order. Returns `true` when it changed and the caller
    /// should reload.
    pub fn set_sort(&mut self, sort: SortOption) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Apply a debounced search. Only re-filters; never refetches.
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.page = 1;
        self.viewer.clamp_to(self.filtered_len());
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Follow a viewport resize. A new page size starts over at page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return;
        }
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn filtered(&self) -> Vec<&SavedImageRecord> {
        filter_items(&self.snapshot, &self.query)
    }

    fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.page_size)
    }

    pub fn page_items(&self) -> Vec<&SavedImageRecord> {
        let filtered = self.filtered();
        let page = clamp_page(self.page, filtered.len(), self.page_size);
        paginate(&filtered, page, self.page_size).to_vec()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.filtered_len(), self.page_size);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    // Selection

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn toggle_select(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Select every record matching the current search, on every page.
    pub fn select_all(&mut self) {
        let ids: Vec<String> = self.filtered().iter().map(|r| r.id.clone()).collect();
        self.selection.select_all(ids);
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    // Viewer

    pub fn viewer(&self) -> ViewerState {
        self.viewer
    }

    /// Open the viewer on the `index`-th card of the current page.
    pub fn open_viewer(&mut self, index_on_page: usize) -> bool {
        let index = (self.page - 1) * self.page_size + index_on_page;
        self.viewer.open(index, self.filtered_len())
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    pub fn viewer_prev(&mut self) -> bool {
        let len = self.filtered_len();
        self.viewer.navigate_prev(len, &mut self.page, self.page_size)
    }

    pub fn viewer_next(&mut self) -> bool {
        let len = self.filtered_len();
        self.viewer.navigate_next(len, &mut self.page, self.page_size)
    }

    pub fn apply_viewer_command(&mut self, command: ViewerCommand) -> bool {
        let len = self.filtered_len();
        self.viewer.apply(command, len, &mut self.page, self.page_size)
    }

    /// The record under the viewer cursor, while open.
    pub fn current_image(&self) -> Option<&SavedImageRecord> {
        if !self.viewer.is_open() {
            return None;
        }
        self.filtered().get(self.viewer.cursor()).copied()
    }

    // Bulk actions

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Mark a bulk action as running. Returns `false` if one already is.
    pub fn begin_processing(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        self.error = None;
        true
    }

    pub fn end_processing(&mut self) {
        self.processing = false;
    }

    /// Ask for delete confirmation. Needs a non-empty selection.
    pub fn request_delete(&mut self) -> bool {
        if self.selection.is_empty() || self.processing {
            return false;
        }
        self.confirm_delete = true;
        true
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    /// Drop deleted ids from the snapshot after the backend confirmed them.
    pub fn apply_soft_delete(&mut self, ids: &[String]) {
        self.snapshot.retain(|r| !ids.contains(&r.id));
        self.selection.clear();
        self.confirm_delete = false;
        let len = self.filtered_len();
        self.page = clamp_page(self.page, len, self.page_size);
        self.viewer.clamp_to(len);
    }

    /// Claim the selection for a bulk download.
    pub fn begin_download(&mut self) -> Option<Vec<String>> {
        if self.selection.is_empty() || !self.begin_processing() {
            return None;
        }
        Some(self.selected_ids())
    }

    /// Apply the result of a download started with `begin_download`.
    ///
    /// An archive is handed back even when every fetch failed; in that case
    /// the error message is set as well.
    pub fn finish_download(
        &mut self,
        result: Result<BulkDownload, LibraryError>,
    ) -> Option<BulkDownload> {
        self.end_processing();
        match result {
            Ok(download) => {
                if download.included == 0 {
                    self.error = Some(NOTHING_DOWNLOADED.to_string());
                }
                Some(download)
            }
            Err(e) => {
                self.error = Some(e.message().to_string());
                None
            }
        }
    }

    /// Claim the selection for deletion. `None` unless `request_delete` was
    /// accepted first and no other bulk action is running.
    pub fn begin_delete(&mut self) -> Option<Vec<String>> {
        if !self.confirm_delete || !self.begin_processing() {
            return None;
        }
        Some(self.selected_ids())
    }

    /// Apply the backend's answer to a delete started with `begin_delete`.
    ///
    /// On failure the snapshot and selection are left alone and the error
    /// message is kept for display.
    pub fn finish_delete(&mut self, ids: &[String], result: Result<(), LibraryError>) -> bool {
        self.confirm_delete = false;
        self.end_processing();
        match result {
            Ok(()) => {
                self.apply_soft_delete(ids);
                true
            }
            Err(e) => {
                error!("Bulk delete failed: {}", e);
                self.error = Some(e.message().to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, prompt: &str) -> SavedImageRecord {
        SavedImageRecord {
            id: id.to_string(),
            owner_id: "user-1".to_string(),
            image_url: format!("https://cdn/{id}.png"),
            prompt: prompt.to_string(),
            style: "default".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    fn loaded(records: Vec<SavedImageRecord>, page_size: usize) -> LibraryController {
        let mut c = LibraryController::new(page_size);
        let generation = c.begin_load();
        assert!(c.finish_load(generation, Ok(records)));
        c
    }

    fn five() -> Vec<SavedImageRecord> {
        vec![
            record("a", "Red Fox"),
            record("b", "Blue Sky"),
            record("c", "red barn"),
            record("d", "Green Hill"),
            record("e", ""),
        ]
    }

    #[test]
    fn stale_load_dropped() {
        let mut c = LibraryController::new(3);
        let first = c.begin_load();
        let second = c.begin_load();
        assert!(c.finish_load(second, Ok(vec![record("new", "")])));
        assert!(!c.finish_load(first, Ok(vec![record("old", "")])));
        assert_eq!(c.snapshot().len(), 1);
        assert_eq!(c.snapshot()[0].id, "new");
        assert!(!c.is_loading());
    }

    #[test]
    fn load_error_keeps_snapshot() {
        let mut c = loaded(five(), 2);
        let generation = c.begin_load();
        c.finish_load(
            generation,
            Err(LibraryError::Transport(LOAD_FAILED.to_string())),
        );
        assert_eq!(c.snapshot().len(), 5);
        assert_eq!(c.error(), Some(LOAD_FAILED));
    }

    #[test]
    fn search_filters_and_resets_page() {
        let mut c = loaded(five(), 2);
        c.next_page();
        assert_eq!(c.page(), 2);
        c.set_query("RED");
        assert_eq!(c.page(), 1);
        let ids: Vec<&str> = c.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(c.total_pages(), 1);
    }

    #[test]
    fn select_all_uses_filtered_set_across_pages() {
        let mut c = loaded(five(), 1);
        c.set_query("r");
        c.select_all();
        // "Red Fox", "red barn", "Green Hill"
        assert_eq!(c.selected_ids(), vec!["a", "c", "d"]);
        c.deselect_all();
        assert!(c.selection().is_empty());
    }

    #[test]
    fn pages_clamp() {
        let mut c = loaded(five(), 2);
        c.prev_page();
        assert_eq!(c.page(), 1);
        c.go_to_page(99);
        assert_eq!(c.page(), 3);
        assert_eq!(c.page_items().len(), 1);
        c.set_page_size(5);
        assert_eq!(c.page(), 1);
        c.set_page_size(1);
        c.go_to_page(4);
        c.set_page_size(1);
        assert_eq!(c.page(), 4);
    }

    #[test]
    fn viewer_keeps_page_in_step() {
        let mut c = loaded(five(), 2);
        c.go_to_page(3);
        assert!(c.open_viewer(0));
        assert_eq!(c.viewer().cursor(), 4);
        for _ in 0..3 {
            assert!(c.viewer_prev());
        }
        assert_eq!(c.viewer().cursor(), 1);
        assert_eq!(c.page(), 1);
        assert_eq!(c.current_image().map(|r| r.id.as_str()), Some("b"));
        assert!(c.apply_viewer_command(ViewerCommand::Close));
        assert!(c.current_image().is_none());
    }

    #[test]
    fn soft_delete_applied_locally() {
        let mut c = loaded(five(), 2);
        c.toggle_select("a");
        c.toggle_select("e");
        assert!(c.request_delete());
        let ids = c.selected_ids();
        c.apply_soft_delete(&ids);
        let left: Vec<&str> = c.snapshot().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(left, vec!["b", "c", "d"]);
        assert!(c.selection().is_empty());
        assert!(!c.is_confirming_delete());
    }

    #[test]
    fn delete_needs_selection() {
        let mut c = loaded(five(), 2);
        assert!(!c.request_delete());
    }

    #[test]
    fn reload_prunes_missing_selection() {
        let mut c = loaded(five(), 2);
        c.toggle_select("a");
        c.toggle_select("b");
        let generation = c.begin_load();
        c.finish_load(generation, Ok(vec![record("b", "Blue Sky")]));
        assert_eq!(c.selected_ids(), vec!["b"]);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut c = loaded(five(), 2);
        c.toggle_select("a");
        assert_eq!(c.begin_delete(), None);
        assert!(!c.is_processing());

        assert!(c.request_delete());
        assert_eq!(c.begin_delete(), Some(vec!["a".to_string()]));
        assert!(c.is_processing());
        assert_eq!(c.begin_delete(), None);
    }

    #[test]
    fn failed_delete_keeps_selection() {
        let mut c = loaded(five(), 2);
        c.toggle_select("b");
        c.request_delete();
        let ids = c.begin_delete().unwrap();
        assert!(!c.finish_delete(&ids, Err(LibraryError::Transport("denied".to_string()))));
        assert_eq!(c.snapshot().len(), 5);
        assert_eq!(c.selected_ids(), vec!["b"]);
        assert_eq!(c.error(), Some("denied"));
        assert!(!c.is_confirming_delete());
        assert!(!c.is_processing());
    }

    #[test]
    fn empty_download_is_handed_back_with_warning() {
        let mut c = loaded(five(), 2);
        assert_eq!(c.begin_download(), None);
        c.toggle_select("a");
        assert!(c.begin_download().is_some());
        let empty = BulkDownload {
            file_name: "selected_images.zip".to_string(),
            bytes: Vec::new(),
            included: 0,
            skipped: 1,
        };
        assert_eq!(c.finish_download(Ok(empty.clone())), Some(empty));
        assert_eq!(c.error(), Some(NOTHING_DOWNLOADED));
        assert!(!c.is_processing());
    }
}
