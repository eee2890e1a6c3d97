use dioxus::prelude::*;

/// Inline error box. The message is shown verbatim.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-md mb-4",
            p { "{message}" }
        }
    }
}
