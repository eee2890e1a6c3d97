//! Transient toast for save results

use crate::components::icons::XIcon;
use crate::display_types::{Notification, NotificationKind};
use dioxus::prelude::*;

#[component]
pub fn NotificationToast(notification: Notification, on_dismiss: EventHandler<()>) -> Element {
    let tone = match notification.kind {
        NotificationKind::Success => "bg-green-50 border-green-200 text-green-800",
        NotificationKind::Error => "bg-red-50 border-red-200 text-red-800",
    };

    rsx! {
        div {
            role: "status",
            class: "fixed bottom-6 right-6 z-50 flex items-center gap-3 px-4 py-3 rounded-md border shadow-lg {tone}",
            span { "{notification.message}" }
            button {
                class: "opacity-60 hover:opacity-100",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                XIcon {}
            }
        }
    }
}
