//! coloria-common - pure library-view state logic
//!
//! No I/O and no dependencies. Shared by the core crate (controller) and the
//! UI crate (hooks and components).

mod debounce;
mod library_view;
mod page_size;
mod request_guard;
mod selection;
mod sort;
mod viewer;

pub use debounce::{DebounceTicket, Debouncer};
pub use library_view::{clamp_page, filter_items, paginate, total_pages, Searchable};
pub use page_size::{items_per_page, DEFAULT_VIEWPORT_WIDTH};
pub use request_guard::{Generation, RequestGuard};
pub use selection::Selection;
pub use sort::{SortDirection, SortField, SortOption};
pub use viewer::{ViewerCommand, ViewerState};
