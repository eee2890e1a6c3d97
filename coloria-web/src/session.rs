//! Session context
//!
//! Provided once by `App`. The stored session is restored on mount unless it
//! has expired, and the in-memory state is reset on unmount. Sign-in persists
//! to local storage, sign-out clears it.

use coloria_core::auth::{Session, SessionState};
use dioxus::prelude::*;
use tracing::{info, warn};

const SESSION_KEY: &str = "coloria.session";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_stored() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) if session.is_expired(chrono::Utc::now().timestamp()) => {
            info!("Stored session for {} has expired", session.user.id);
            clear_stored();
            None
        }
        Ok(session) => Some(session),
        Err(e) => {
            warn!("Discarding unreadable stored session: {}", e);
            clear_stored();
            None
        }
    }
}

fn store(session: &Session) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => warn!("Failed to persist session: {}", e),
    }
}

fn clear_stored() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            state: Signal::new(SessionState::default()),
        }
    }

    fn init(mut self) {
        let restored = load_stored();
        if let Some(session) = &restored {
            info!("Restored session for {}", session.user.id);
        }
        self.state.set(SessionState::restored(restored));
    }

    fn teardown(mut self) {
        self.state.set(SessionState::default());
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    pub fn owner_id(&self) -> Option<String> {
        self.state.read().owner_id().map(str::to_string)
    }

    pub fn sign_in(mut self, session: Session) {
        store(&session);
        self.state.set(SessionState::restored(Some(session)));
    }

    pub fn sign_out(mut self) {
        clear_stored();
        self.state.set(SessionState::restored(None));
    }
}

/// Provide the session context for the component tree below the caller.
pub fn use_session_provider() -> SessionContext {
    let ctx = use_context_provider(SessionContext::new);
    use_hook(move || ctx.init());
    use_drop(move || ctx.teardown());
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
