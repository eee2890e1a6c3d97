//! Labelled form input

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Search,
}

impl InputKind {
    fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Search => "search",
        }
    }
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] kind: InputKind,
    #[props(default)] id: Option<String>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let input_class = format!(
        "block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm placeholder-gray-400 focus:outline-none focus:ring-purple-500 focus:border-purple-500 {}",
        class.as_deref().unwrap_or_default()
    );

    rsx! {
        div {
            if let Some(label) = label {
                label {
                    r#for: id.clone().unwrap_or_default(),
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "{label}"
                }
            }
            input {
                id: id.as_deref(),
                r#type: kind.as_str(),
                class: "{input_class}",
                value: "{value}",
                placeholder: placeholder.as_deref(),
                required,
                disabled,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
