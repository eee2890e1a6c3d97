//! Sign-in and sign-up screens

use crate::components::text_input::{InputKind, TextInput};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Split screen: brand panel on the left, form on the right.
#[component]
fn AuthLayout(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex",
            div { class: "hidden lg:flex lg:w-1/2 relative bg-gradient-to-br from-purple-500 to-blue-600",
                div { class: "absolute inset-0 flex flex-col justify-between p-12 text-white",
                    h1 { class: "text-2xl font-bold", "ColorIA" }
                    div {
                        p { class: "text-xl italic",
                            "ColorIA is a game changer for me. I have been able to generate high quality color book pages within minutes."
                        }
                        p { class: "mt-4", "David S." }
                    }
                }
            }
            div { class: "w-full lg:w-1/2 flex items-center justify-center p-8",
                div { class: "max-w-md w-full space-y-8",
                    div {
                        h2 { class: "text-3xl font-bold text-gray-900", "{title}" }
                        p { class: "mt-2 text-sm text-gray-600", "{subtitle}" }
                    }
                    {children}
                }
            }
        }
    }
}

#[component]
fn FormError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { role: "alert", class: "text-red-500 text-sm text-center", "{message}" }
        }
    }
}

#[component]
pub fn LoginView(
    email: String,
    password: String,
    on_email: EventHandler<String>,
    on_password: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_switch: EventHandler<()>,
    error: Option<String>,
    #[props(default)] submitting: bool,
) -> Element {
    rsx! {
        AuthLayout {
            title: "Login".to_string(),
            subtitle: "Enter your email below to login to your account".to_string(),
            form {
                class: "mt-8 space-y-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },
                FormError { message: error }
                div { class: "space-y-4",
                    TextInput {
                        id: "email".to_string(),
                        label: "Email".to_string(),
                        kind: InputKind::Email,
                        required: true,
                        value: email,
                        on_input: on_email,
                    }
                    TextInput {
                        id: "password".to_string(),
                        label: "Password".to_string(),
                        kind: InputKind::Password,
                        required: true,
                        value: password,
                        on_input: on_password,
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Block,
                    r#type: "submit",
                    loading: submitting,
                    onclick: move |_| {},
                    "Login"
                }
                p { class: "text-center text-sm text-gray-600",
                    "Don't have an account? "
                    a {
                        class: "font-medium text-purple-600 hover:text-purple-500 cursor-pointer",
                        onclick: move |_| on_switch.call(()),
                        "Sign up"
                    }
                }
            }
        }
    }
}

/// Sign-up form fields, edited as one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[component]
pub fn SignUpView(
    fields: SignUpForm,
    on_change: EventHandler<SignUpForm>,
    on_submit: EventHandler<()>,
    on_switch: EventHandler<()>,
    error: Option<String>,
    #[props(default)] notice: Option<String>,
    #[props(default)] submitting: bool,
) -> Element {
    let f1 = fields.clone();
    let f2 = fields.clone();
    let f3 = fields.clone();
    let f4 = fields.clone();

    rsx! {
        AuthLayout {
            title: "Sign Up".to_string(),
            subtitle: "Enter your information below to create an account".to_string(),
            form {
                class: "mt-8 space-y-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },
                FormError { message: error }
                if let Some(notice) = notice {
                    div { class: "text-green-600 text-sm text-center", "{notice}" }
                }
                div { class: "space-y-4",
                    TextInput {
                        id: "fullName".to_string(),
                        label: "Full Name".to_string(),
                        required: true,
                        value: fields.full_name.clone(),
                        on_input: move |v| on_change.call(SignUpForm { full_name: v, ..f1.clone() }),
                    }
                    TextInput {
                        id: "email".to_string(),
                        label: "Email".to_string(),
                        kind: InputKind::Email,
                        required: true,
                        value: fields.email.clone(),
                        on_input: move |v| on_change.call(SignUpForm { email: v, ..f2.clone() }),
                    }
                    TextInput {
                        id: "password".to_string(),
                        label: "Password".to_string(),
                        kind: InputKind::Password,
                        required: true,
                        value: fields.password.clone(),
                        on_input: move |v| on_change.call(SignUpForm { password: v, ..f3.clone() }),
                    }
                    TextInput {
                        id: "confirmPassword".to_string(),
                        label: "Confirm Password".to_string(),
                        kind: InputKind::Password,
                        required: true,
                        value: fields.confirm_password.clone(),
                        on_input: move |v| on_change.call(SignUpForm { confirm_password: v, ..f4.clone() }),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Block,
                    r#type: "submit",
                    loading: submitting,
                    onclick: move |_| {},
                    "Create an account"
                }
                p { class: "text-center text-sm text-gray-600",
                    "Already have an account? "
                    a {
                        class: "font-medium text-purple-600 hover:text-purple-500 cursor-pointer",
                        onclick: move |_| on_switch.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
