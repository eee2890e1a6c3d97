use crate::components::icons::{EyeIcon, ImageIcon};
use crate::display_types::LibraryImage;
use dioxus::prelude::*;

/// One grid cell: selection checkbox, view button, thumbnail, caption.
#[component]
pub fn ImageCard(
    image: LibraryImage,
    selected: bool,
    on_toggle: EventHandler<()>,
    on_view: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col group relative",
            div { class: "absolute top-2 left-2 z-20",
                input {
                    r#type: "checkbox",
                    checked: selected,
                    aria_label: "Select image",
                    class: "w-5 h-5 rounded border-gray-300 text-purple-600 focus:ring-purple-500",
                    onchange: move |_| on_toggle.call(()),
                }
            }
            button {
                class: "absolute top-2 right-2 z-20 p-2 bg-black/50 rounded-lg text-white opacity-0 group-hover:opacity-100 transition-opacity",
                aria_label: "View image",
                onclick: move |_| on_view.call(()),
                EyeIcon {}
            }
            div { class: "relative aspect-square w-full bg-gray-200 rounded-lg overflow-hidden mb-2",
                if selected {
                    div { class: "absolute inset-0 ring-4 ring-inset ring-purple-500 rounded-lg z-10 pointer-events-none" }
                }
                if image.image_url.is_empty() {
                    div { class: "w-full h-full flex items-center justify-center text-gray-400",
                        ImageIcon { class: "w-12 h-12" }
                    }
                } else {
                    img {
                        src: "{image.image_url}",
                        alt: "{image.prompt}",
                        class: "w-full h-full object-cover",
                    }
                }
            }
            p { class: "text-sm text-gray-600 truncate", title: "{image.prompt}", "{image.caption}" }
        }
    }
}
