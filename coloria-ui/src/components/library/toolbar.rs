//! Search box, sort select, pagination, selection and bulk action controls

use crate::components::icons::{
    ChevronLeftIcon, ChevronRightIcon, DownloadIcon, SearchIcon, TrashIcon, XIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant};
use coloria_common::SortOption;
use dioxus::prelude::*;

#[component]
pub fn SearchBox(value: String, on_input: EventHandler<String>) -> Element {
    let has_text = !value.is_empty();
    rsx! {
        div { class: "relative flex-1",
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400",
                SearchIcon { class: "w-5 h-5" }
            }
            input {
                r#type: "text",
                placeholder: "Search images...",
                value: "{value}",
                class: "w-full pl-10 pr-10 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500",
                oninput: move |e| on_input.call(e.value()),
            }
            if has_text {
                button {
                    class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600 transition-colors",
                    aria_label: "Clear search",
                    onclick: move |_| on_input.call(String::new()),
                    XIcon { class: "w-5 h-5" }
                }
            }
        }
    }
}

#[component]
pub fn SortSelect(value: SortOption, on_change: EventHandler<SortOption>) -> Element {
    rsx! {
        select {
            class: "pl-4 pr-10 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 bg-white",
            value: value.key(),
            onchange: move |e| {
                if let Some(option) = SortOption::from_key(&e.value()) {
                    on_change.call(option);
                }
            },
            for choice in SortOption::ALL {
                option {
                    key: "{choice.key()}",
                    value: choice.key(),
                    selected: choice == value,
                    {choice.label()}
                }
            }
        }
    }
}

#[component]
pub fn PaginationControls(
    page: usize,
    total_pages: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let at_first = page <= 1;
    let at_last = page >= total_pages;
    rsx! {
        div { class: "flex items-center gap-2",
            button {
                class: "p-2 bg-gray-100 hover:bg-gray-200 rounded-lg disabled:opacity-50",
                aria_label: "Previous page",
                disabled: at_first,
                onclick: move |_| on_prev.call(()),
                ChevronLeftIcon {}
            }
            span { class: "px-3 py-2 text-xs tabular-nums", "{page} / {total_pages}" }
            button {
                class: "p-2 bg-gray-100 hover:bg-gray-200 rounded-lg disabled:opacity-50",
                aria_label: "Next page",
                disabled: at_last,
                onclick: move |_| on_next.call(()),
                ChevronRightIcon {}
            }
        }
    }
}

#[component]
pub fn LibraryToolbar(
    search: String,
    sort: SortOption,
    page: usize,
    total_pages: usize,
    selected_count: usize,
    processing: bool,
    on_search: EventHandler<String>,
    on_sort: EventHandler<SortOption>,
    on_prev_page: EventHandler<()>,
    on_next_page: EventHandler<()>,
    on_select_all: EventHandler<()>,
    on_deselect_all: EventHandler<()>,
    on_download: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-4 mb-6",
            div { class: "flex gap-4",
                SearchBox { value: search, on_input: on_search }
                SortSelect { value: sort, on_change: on_sort }
            }
            div { class: "flex flex-wrap justify-between items-center gap-4",
                div { class: "flex items-center gap-4",
                    PaginationControls {
                        page,
                        total_pages,
                        on_prev: on_prev_page,
                        on_next: on_next_page,
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_select_all.call(()),
                        "Select All"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_deselect_all.call(()),
                        "Deselect All"
                    }
                    if selected_count > 0 {
                        span { class: "text-sm text-gray-500", "{selected_count} selected" }
                    }
                }
                if selected_count > 0 {
                    div { class: "flex items-center gap-3",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            disabled: processing,
                            onclick: move |_| on_download.call(()),
                            DownloadIcon {}
                            "Download"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            disabled: processing,
                            onclick: move |_| on_delete.call(()),
                            TrashIcon {}
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
