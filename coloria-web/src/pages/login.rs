use crate::services::use_services;
use crate::session::use_session;
use crate::Route;
use coloria_core::auth::SIGN_IN_FAILED;
use coloria_ui::LoginView;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn Login() -> Element {
    let services = use_services();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if submitting() {
            return;
        }
        error.set(None);
        submitting.set(true);
        let auth = services.auth.clone();
        spawn(async move {
            match auth.sign_in_with_password(&email(), &password()).await {
                Ok(signed_in) => {
                    session.sign_in(signed_in);
                    navigator().replace(Route::Generator {});
                }
                Err(e) => {
                    warn!("Sign in failed: {}", e);
                    error.set(Some(SIGN_IN_FAILED.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        LoginView {
            email: email(),
            password: password(),
            on_email: move |v| email.set(v),
            on_password: move |v| password.set(v),
            on_submit: submit,
            on_switch: move |_| {
                navigator().push(Route::SignUp {});
            },
            error: error(),
            submitting: submitting(),
        }
    }
}
