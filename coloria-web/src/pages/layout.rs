//! Route guards and the signed-in app shell

use crate::services::use_services;
use crate::session::use_session;
use crate::Route;
use coloria_ui::{AppLayoutView, LoadingSpinner, NavItem, Sidebar};
use dioxus::prelude::*;

/// `/` goes to the generator or the login screen.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    use_effect(move || {
        if session.is_loading() {
            return;
        }
        if session.owner_id().is_some() {
            navigator().replace(Route::Generator {});
        } else {
            navigator().replace(Route::Login {});
        }
    });
    rsx! {
        LoadingSpinner {}
    }
}

/// Login and sign-up screens. A signed-in user is sent to the app.
#[component]
pub fn AuthShell() -> Element {
    let session = use_session();
    use_effect(move || {
        if !session.is_loading() && session.owner_id().is_some() {
            navigator().replace(Route::Generator {});
        }
    });
    rsx! {
        Outlet::<Route> {}
    }
}

/// Sidebar layout for the generator and library. Without a user the
/// visitor is sent to the login screen.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let services = use_services();
    let route = use_route::<Route>();

    use_effect(move || {
        if !session.is_loading() && session.owner_id().is_none() {
            navigator().replace(Route::Login {});
        }
    });

    let state = session.state();
    if state.loading {
        return rsx! {
            LoadingSpinner {}
        };
    }
    let Some(user) = state.user().cloned() else {
        return rsx! {};
    };

    let active = match route {
        Route::Generator {} => Some(NavItem::Generate),
        Route::Library {} => Some(NavItem::Library),
        _ => None,
    };

    rsx! {
        AppLayoutView {
            sidebar: rsx! {
                Sidebar {
                    active,
                    user_label: user.display_name().to_string(),
                    on_navigate: move |item| match item {
                        NavItem::Generate => {
                            navigator().push(Route::Generator {});
                        }
                        NavItem::Library => {
                            navigator().push(Route::Library {});
                        }
                    },
                    on_sign_out: move |_| {
                        let Some(current) = session.session() else {
                            return;
                        };
                        session.sign_out();
                        let auth = services.auth.clone();
                        spawn(async move {
                            if let Err(e) = auth.sign_out(&current).await {
                                tracing::warn!("Sign out request failed: {}", e);
                            }
                        });
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
