//! Library page view - pure rendering, no data fetching

use super::image_card::ImageCard;
use super::toolbar::LibraryToolbar;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::ImageIcon;
use crate::display_types::LibraryPageState;
use coloria_common::SortOption;
use dioxus::prelude::*;

#[component]
pub fn LibraryView(
    state: LibraryPageState,
    on_search: EventHandler<String>,
    on_sort: EventHandler<SortOption>,
    on_prev_page: EventHandler<()>,
    on_next_page: EventHandler<()>,
    on_toggle: EventHandler<String>,
    /// Index of the card on the current page
    on_view: EventHandler<usize>,
    on_select_all: EventHandler<()>,
    on_deselect_all: EventHandler<()>,
    on_download: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    if state.loading {
        return rsx! {
            div { class: "p-8 h-screen flex items-center justify-center",
                LoadingSpinner { message: "Loading your library...".to_string() }
            }
        };
    }

    rsx! {
        div { class: "p-8 min-h-screen flex flex-col",
            h1 { class: "text-3xl font-bold mb-6", "Library" }
            div { class: "w-full max-w-screen-lg mx-auto flex flex-col flex-1",
                if let Some(message) = state.error.clone() {
                    ErrorDisplay { message }
                }
                LibraryToolbar {
                    search: state.search.clone(),
                    sort: state.sort,
                    page: state.page,
                    total_pages: state.total_pages,
                    selected_count: state.selected_count(),
                    processing: state.processing,
                    on_search,
                    on_sort,
                    on_prev_page,
                    on_next_page,
                    on_select_all,
                    on_deselect_all,
                    on_download,
                    on_delete,
                }
                if state.images.is_empty() {
                    div { class: "text-center py-16 text-gray-500",
                        ImageIcon { class: "w-16 h-16 mx-auto mb-4 text-gray-300" }
                        if state.total_count == 0 {
                            h2 { class: "text-xl font-semibold text-gray-700 mb-2",
                                "No saved images yet"
                            }
                            p { "Generate an image and save it to build your library." }
                        } else {
                            p { "No images match your search." }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 2xl:grid-cols-5 gap-6",
                        for (index , image) in state.images.iter().cloned().enumerate() {
                            {
                                let selected = state.is_selected(&image.id);
                                let id = image.id.clone();
                                rsx! {
                                    ImageCard {
                                        key: "{image.id}",
                                        image,
                                        selected,
                                        on_toggle: move |_| on_toggle.call(id.clone()),
                                        on_view: move |_| on_view.call(index),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
