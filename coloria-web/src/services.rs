//! Backend clients shared through context

use coloria_core::auth::{AuthClient, Session};
use coloria_core::config::Config;
use coloria_core::fetch::HttpAssetFetcher;
use coloria_core::generation::{resolve_endpoint, GenerationClient};
use coloria_core::supabase::SupabaseGateway;
use dioxus::prelude::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct Services {
    pub config: Rc<Config>,
    pub auth: Rc<AuthClient>,
    pub generation: Rc<GenerationClient>,
    pub fetcher: HttpAssetFetcher,
    anon_gateway: SupabaseGateway,
}

impl Services {
    pub fn new(config: Config) -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let endpoint = resolve_endpoint(&origin, &config.generate_endpoint);
        Self {
            auth: Rc::new(AuthClient::from_config(&config)),
            generation: Rc::new(GenerationClient::new(endpoint)),
            fetcher: HttpAssetFetcher::new(),
            anon_gateway: SupabaseGateway::from_config(&config),
            config: Rc::new(config),
        }
    }

    /// Gateway acting as the signed-in user.
    pub fn gateway(&self, session: &Session) -> SupabaseGateway {
        self.anon_gateway
            .clone()
            .with_access_token(session.access_token.clone())
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
