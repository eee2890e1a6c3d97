mod image_card;
mod image_viewer;
mod toolbar;
mod view;

pub use image_card::ImageCard;
pub use image_viewer::ImageViewer;
pub use toolbar::{LibraryToolbar, PaginationControls, SearchBox, SortSelect};
pub use view::LibraryView;
