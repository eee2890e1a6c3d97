use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use dioxus::prelude::*;

#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = true)] is_destructive: bool,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_variant = if is_destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            div { class: "bg-white rounded-lg shadow-xl p-6 max-w-md w-full",
                h2 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
                p { class: "text-gray-600 mb-6", "{message}" }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: confirm_variant,
                        size: ButtonSize::Medium,
                        loading: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
