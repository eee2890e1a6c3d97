//! Email/password authentication against the hosted auth service.

use crate::config::Config;
use crate::http::read_failure;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const SIGN_IN_FAILED: &str = "Failed to sign in. Please check your credentials.";
pub const SIGN_UP_FAILED: &str = "Failed to create an account. Please try again.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// Name shown in the sidebar: full name, then email, then id.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// A signed-in session as returned by the token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Unix seconds after which the access token is no longer accepted.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    /// Fill in `expires_at` from `expires_in` when the server only sent the
    /// relative lifetime.
    pub fn stamped(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now_secs + secs as i64);
        }
        self
    }

    /// A session with no known expiry is taken as still valid.
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| now_secs >= at)
    }
}

/// What the rest of the app sees of authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the stored session has been restored on mount
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn restored(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.user().map(|u| u.id.as_str())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}

/// Sign-up response: a full session, or just the user when email
/// confirmation is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationPending(AuthUser),
}

/// Check the sign-up form before any request is made.
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    if password != confirm {
        return Err(AuthError::Validation(PASSWORD_MISMATCH.to_string()));
    }
    Ok(())
}

pub struct AuthClient {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        let resp = self
            .http
            .post(self.url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email.trim(), "password": password }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, SIGN_IN_FAILED).await;
            debug!("Sign in rejected ({}): {}", status, message);
            return Err(AuthError::Api { status, message });
        }
        let session = resp
            .json::<Session>()
            .await?
            .stamped(chrono::Utc::now().timestamp());
        info!("Signed in as {}", session.user.id);
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        validate_sign_up(email, password, confirm_password)?;
        let resp = self
            .http
            .post(self.url("signup"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({
                "email": email.trim(),
                "password": password,
                "data": { "full_name": full_name.trim() },
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, SIGN_UP_FAILED).await;
            return Err(AuthError::Api { status, message });
        }
        Ok(match resp.json::<SignUpResponse>().await? {
            SignUpResponse::Session(session) => {
                let session = session.stamped(chrono::Utc::now().timestamp());
                info!("Signed up and signed in as {}", session.user.id);
                SignUpOutcome::SignedIn(session)
            }
            SignUpResponse::User(user) => {
                info!("Signed up {}, awaiting email confirmation", user.id);
                SignUpOutcome::ConfirmationPending(user)
            }
        })
    }

    pub async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, "Sign out failed").await;
            return Err(AuthError::Api { status, message });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_rejected() {
        let err = validate_sign_up("a@b.c", "secret1", "secret2").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn parse_token_response() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "user-1", "email": "a@b.c", "user_metadata": {"full_name": "Ada"}}
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.display_name(), "Ada");
        let state = SessionState::restored(Some(session));
        assert_eq!(state.owner_id(), Some("user-1"));
        assert!(!state.loading);
    }

    #[test]
    fn session_expiry_follows_lifetime() {
        let json = r#"{"access_token": "jwt", "expires_in": 3600, "user": {"id": "user-1"}}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(!session.is_expired(i64::MAX));

        let session = session.stamped(1_000);
        assert_eq!(session.expires_at, Some(4_600));
        assert!(!session.is_expired(4_599));
        assert!(session.is_expired(4_600));

        // An absolute expiry from the server wins over the lifetime.
        let restamped = Session {
            expires_at: Some(2_000),
            ..session
        }
        .stamped(1_000);
        assert_eq!(restamped.expires_at, Some(2_000));
    }

    #[test]
    fn stored_session_round_trips_expiry() {
        let json = r#"{"access_token": "jwt", "expires_at": 1700000000, "user": {"id": "user-1"}}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        let stored = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored.expires_at, Some(1_700_000_000));
        assert!(restored.is_expired(1_700_000_001));
    }

    #[test]
    fn sign_up_without_session_is_pending() {
        let json = r#"{"id": "user-2", "email": "b@c.d", "user_metadata": {}}"#;
        let parsed: SignUpResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(parsed, SignUpResponse::User(u) if u.id == "user-2"));
    }

    #[test]
    fn default_state_is_loading_without_user() {
        let state = SessionState::default();
        assert!(state.loading);
        assert_eq!(state.owner_id(), None);
    }
}
