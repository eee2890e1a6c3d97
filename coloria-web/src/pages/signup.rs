use crate::services::use_services;
use crate::session::use_session;
use crate::Route;
use coloria_core::auth::{validate_sign_up, AuthError, SignUpOutcome, SIGN_UP_FAILED};
use coloria_ui::{SignUpForm, SignUpView};
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn SignUp() -> Element {
    let services = use_services();
    let session = use_session();
    let mut fields = use_signal(SignUpForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if submitting() {
            return;
        }
        error.set(None);
        notice.set(None);
        let form = fields();
        if let Err(e) = validate_sign_up(&form.email, &form.password, &form.confirm_password) {
            error.set(Some(e.to_string()));
            return;
        }
        submitting.set(true);
        let auth = services.auth.clone();
        spawn(async move {
            let result = auth
                .sign_up(
                    &form.full_name,
                    &form.email,
                    &form.password,
                    &form.confirm_password,
                )
                .await;
            match result {
                Ok(SignUpOutcome::SignedIn(signed_in)) => {
                    session.sign_in(signed_in);
                    navigator().replace(Route::Generator {});
                }
                Ok(SignUpOutcome::ConfirmationPending(_)) => {
                    notice.set(Some(
                        "Check your email to confirm your account, then sign in.".to_string(),
                    ));
                }
                Err(AuthError::Validation(message)) => error.set(Some(message)),
                Err(e) => {
                    warn!("Sign up failed: {}", e);
                    error.set(Some(SIGN_UP_FAILED.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        SignUpView {
            fields: fields(),
            on_change: move |next| fields.set(next),
            on_submit: submit,
            on_switch: move |_| {
                navigator().push(Route::Login {});
            },
            error: error(),
            notice: notice(),
            submitting: submitting(),
        }
    }
}
