pub mod download;
pub mod pages;
pub mod services;
pub mod session;

use coloria_core::config::Config;
use coloria_ui::ErrorDisplay;
use dioxus::prelude::*;
use pages::{AppShell, AuthShell, Generator, Home, Library, Login, SignUp};
use services::Services;
use session::use_session_provider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(AuthShell)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        SignUp {},
    #[end_layout]
    #[layout(AppShell)]
        #[route("/app")]
        Generator {},
        #[route("/library")]
        Library {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_build_env);
    use_session_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        match config {
            Ok(config) => rsx! {
                ServicesProvider { config }
            },
            Err(e) => rsx! {
                div { class: "p-8",
                    ErrorDisplay { message: e.to_string() }
                }
            },
        }
    }
}

#[component]
fn ServicesProvider(config: Config) -> Element {
    use_context_provider(move || Services::new(config));
    rsx! {
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
