use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-purple-600" }
            p { class: "ml-4 text-gray-600", "{message}" }
        }
    }
}
