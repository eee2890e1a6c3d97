//! Image viewer carousel
//!
//! The parent owns the cursor and page; this view only renders the current
//! image and reports commands. Escape, ArrowLeft and ArrowRight are bound on
//! the window only while the viewer is open.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, DownloadIcon, XIcon};
use crate::components::utils::format_long_date;
use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use crate::display_types::LibraryImage;
use crate::hooks::use_viewer_keys;
use coloria_common::ViewerCommand;
use dioxus::prelude::*;

#[component]
pub fn ImageViewer(
    is_open: ReadSignal<bool>,
    /// The filtered sequence the cursor indexes
    images: Vec<LibraryImage>,
    cursor: usize,
    on_command: EventHandler<ViewerCommand>,
    on_download: EventHandler<LibraryImage>,
    #[props(default)] downloading: bool,
) -> Element {
    use_viewer_keys(is_open, on_command);

    let total = images.len();
    let Some(current) = images.get(cursor.min(total.saturating_sub(1))).cloned() else {
        return rsx! {};
    };
    let can_prev = cursor > 0;
    let can_next = cursor + 1 < total;
    let created = format_long_date(&current.created_at);
    let for_download = current.clone();

    rsx! {
        Modal {
            is_open,
            on_close: move |_| on_command.call(ViewerCommand::Close),
            div { class: "relative w-[min(64rem,95vw)] bg-white rounded-lg overflow-hidden",
                button {
                    class: "absolute top-4 right-4 z-10 p-2 rounded-full bg-black/50 text-white hover:bg-black/70 transition-colors",
                    aria_label: "Close",
                    onclick: move |_| on_command.call(ViewerCommand::Close),
                    XIcon { class: "w-6 h-6" }
                }
                div { class: "flex flex-col md:flex-row h-[80vh]",
                    div { class: "relative flex-1 bg-gray-100 p-8",
                        img {
                            src: "{current.image_url}",
                            alt: "{current.prompt}",
                            class: "w-full h-full object-contain",
                        }
                        if can_prev {
                            button {
                                class: "absolute left-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 text-white hover:bg-black/70 transition-colors",
                                aria_label: "Previous image",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    on_command.call(ViewerCommand::Previous);
                                },
                                ChevronLeftIcon { class: "w-6 h-6" }
                            }
                        }
                        if can_next {
                            button {
                                class: "absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/50 text-white hover:bg-black/70 transition-colors",
                                aria_label: "Next image",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    on_command.call(ViewerCommand::Next);
                                },
                                ChevronRightIcon { class: "w-6 h-6" }
                            }
                        }
                    }
                    div { class: "w-full md:w-80 p-6 bg-white flex flex-col",
                        h3 { class: "text-lg font-semibold mb-2", "Image Details" }
                        p { class: "text-sm text-gray-500 mb-4", "Created on {created}" }
                        div { class: "flex-1 mb-4",
                            span { class: "block text-sm font-medium text-gray-700 mb-2", "Prompt" }
                            div { class: "bg-gray-50 rounded-lg p-3 h-40 overflow-y-auto",
                                p { class: "text-sm text-gray-600 whitespace-pre-wrap", "{current.prompt}" }
                            }
                        }
                        p { class: "text-xs text-gray-400 mb-2", "{cursor + 1} of {total}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Block,
                            loading: downloading,
                            onclick: move |_| on_download.call(for_download.clone()),
                            DownloadIcon { class: "w-5 h-5" }
                            "Download Image"
                        }
                    }
                }
            }
        }
    }
}
