//! Reusable button component

use dioxus::prelude::*;

/// Unstyled button that only handles the disabled and loading states.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Purple fill, for the main action on a screen
    Primary,
    /// White with a border
    Outline,
    Danger,
    /// Text only
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    /// Full-width form submit
    Block,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 px-3 py-1.5 text-sm",
        ButtonSize::Medium => "inline-flex items-center gap-2 px-4 py-2",
        ButtonSize::Block => "flex w-full justify-center items-center gap-2 px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-purple-600 hover:bg-purple-700 text-white shadow-sm",
        ButtonVariant::Outline => {
            "bg-white border border-gray-300 hover:bg-gray-50 text-gray-700 shadow-sm"
        }
        ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white shadow-sm",
        ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100",
    };

    let base = "rounded-md font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
    let computed_class = match &class {
        Some(extra) => format!("{base} {size_class} {variant_class} {extra}"),
        None => format!("{base} {size_class} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            class: Some(computed_class),
            r#type,
            title,
            onclick,
            if loading {
                span { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-current" }
            }
            {children}
        }
    }
}
