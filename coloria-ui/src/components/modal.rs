//! Modal built on the native `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, and Escape handling.
//! The dialog keeps its native display rules; layout lives on an inner
//! fixed container. `showModal()` throws on an already open dialog, so the
//! `open` attribute is checked first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn dialog_element(id: &str) -> Option<web_sys::HtmlDialogElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlDialogElement>()
        .ok()
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let effect_id = dialog_id.clone();

    use_effect(move || {
        let open = is_open();
        let Some(dialog) = dialog_element(&effect_id) else {
            return;
        };
        if open && !dialog.open() {
            let _ = dialog.show_modal();
        } else if !open && dialog.open() {
            dialog.close();
        }
    });

    let dialog_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent max-w-none max-h-none backdrop:bg-black/75 {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
