//! App shell: sidebar navigation on the left, page content on the right

use crate::components::icons::{ImageIcon, LogOutIcon, SparklesIcon};
use crate::display_types::NavItem;
use dioxus::prelude::*;

#[component]
pub fn Sidebar(
    active: Option<NavItem>,
    user_label: Option<String>,
    on_navigate: EventHandler<NavItem>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let item_class = |item: NavItem| {
        if active == Some(item) {
            "flex w-full items-center gap-3 px-4 py-2 rounded-md bg-gray-800 text-white"
        } else {
            "flex w-full items-center gap-3 px-4 py-2 rounded-md text-gray-300 hover:bg-gray-800 hover:text-white transition-colors"
        }
    };

    rsx! {
        nav { class: "flex h-screen flex-col justify-between bg-gray-900 text-white w-64 p-4 shrink-0",
            div {
                h1 { class: "text-2xl font-bold mb-8", "ColorIA" }
                div { class: "space-y-2",
                    button {
                        class: item_class(NavItem::Generate),
                        onclick: move |_| on_navigate.call(NavItem::Generate),
                        SparklesIcon { class: "h-5 w-5" }
                        "Image Generator"
                    }
                    button {
                        class: item_class(NavItem::Library),
                        onclick: move |_| on_navigate.call(NavItem::Library),
                        ImageIcon { class: "h-5 w-5" }
                        "Library"
                    }
                }
            }
            div {
                if let Some(label) = user_label {
                    p { class: "text-sm text-gray-400 mb-2 truncate", "{label}" }
                }
                button {
                    class: "flex w-full items-center gap-3 px-4 py-2 text-left text-gray-300 hover:bg-gray-800 hover:text-white rounded-md transition-colors",
                    onclick: move |_| on_sign_out.call(()),
                    LogOutIcon { class: "h-5 w-5" }
                    "Log out"
                }
            }
        }
    }
}

#[component]
pub fn AppLayoutView(sidebar: Element, children: Element) -> Element {
    rsx! {
        div { class: "h-screen flex bg-white",
            {sidebar}
            main { class: "flex-1 overflow-y-auto min-w-0", {children} }
        }
    }
}
