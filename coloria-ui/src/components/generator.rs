//! Image generator view - prompt box, result frame, save and download

use crate::components::helpers::NotificationToast;
use crate::components::icons::{ChevronRightIcon, DownloadIcon, HeartIcon};
use crate::display_types::Notification;
use dioxus::prelude::*;

#[component]
pub fn GeneratorView(
    prompt: String,
    on_prompt: EventHandler<String>,
    on_generate: EventHandler<()>,
    generating: bool,
    image_url: Option<String>,
    saving: bool,
    on_save: EventHandler<()>,
    on_download: EventHandler<()>,
    error: Option<String>,
    notification: Option<Notification>,
    on_dismiss_notification: EventHandler<()>,
) -> Element {
    let has_prompt = !prompt.trim().is_empty();
    let heart_class = if saving {
        "h-5 w-5 animate-pulse"
    } else {
        "h-5 w-5"
    };

    rsx! {
        div { class: "max-w-[600px] mx-auto p-6",
            div { class: "flex flex-col items-center gap-6",
                div { class: "w-full space-y-4",
                    h2 { class: "text-2xl font-bold text-gray-800 text-center",
                        "What do you want to draw?"
                    }
                    div { class: "relative",
                        textarea {
                            class: "w-full pr-12 px-4 py-3 text-gray-700 bg-white border-2 border-gray-200 rounded-xl focus:outline-none focus:border-black transition-colors min-h-[100px] resize-none",
                            placeholder: "Describe your imagination here... Be specific about details, style, and atmosphere you want to create.",
                            value: "{prompt}",
                            oninput: move |e| on_prompt.call(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter && !e.modifiers().shift() {
                                    e.prevent_default();
                                    on_generate.call(());
                                }
                            },
                        }
                        if has_prompt {
                            button {
                                class: "absolute top-3 right-3 p-2 bg-gray-800 text-white rounded-lg hover:bg-purple-600 disabled:opacity-50 disabled:cursor-not-allowed transition-colors",
                                aria_label: "Generate",
                                disabled: generating,
                                onclick: move |_| on_generate.call(()),
                                if generating {
                                    span { class: "block animate-spin rounded-full h-5 w-5 border-b-2 border-white" }
                                } else {
                                    ChevronRightIcon { class: "h-5 w-5" }
                                }
                            }
                        }
                    }
                }
                div { class: "relative w-full aspect-square max-h-[400px] border-2 border-dashed border-gray-300 rounded-lg flex items-center justify-center overflow-hidden",
                    if let Some(url) = image_url {
                        img {
                            src: "{url}",
                            alt: "Generated image",
                            class: "max-w-[90%] max-h-[90%] object-contain",
                        }
                        div { class: "absolute top-2 right-2 flex gap-2",
                            button {
                                class: "p-2 bg-white rounded-full shadow-md hover:bg-gray-100 disabled:opacity-50",
                                aria_label: "Save to library",
                                disabled: saving,
                                onclick: move |_| on_save.call(()),
                                HeartIcon { class: heart_class }
                            }
                            button {
                                class: "p-2 bg-white rounded-full shadow-md hover:bg-gray-100",
                                aria_label: "Download",
                                onclick: move |_| on_download.call(()),
                                DownloadIcon { class: "h-5 w-5" }
                            }
                        }
                    } else {
                        p { class: "text-gray-400", "Generated image will appear here" }
                    }
                }
                if let Some(message) = error {
                    div { class: "w-full text-red-500 text-sm", "{message}" }
                }
            }
            if let Some(notification) = notification {
                NotificationToast { notification, on_dismiss: on_dismiss_notification }
            }
        }
    }
}
