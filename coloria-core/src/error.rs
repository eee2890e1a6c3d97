use crate::archive::ArchiveError;
use crate::auth::AuthError;
use crate::fetch::FetchError;
use crate::gateway::GatewayError;
use crate::generation::GenerationError;
use thiserror::Error;

/// Errors as the library and generator views see them.
///
/// Input problems are caught before any request; everything else is a
/// transport failure whose message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Transport(String),
}

impl LibraryError {
    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation(m) | LibraryError::Transport(m) => m,
        }
    }
}

impl From<GatewayError> for LibraryError {
    fn from(e: GatewayError) -> Self {
        LibraryError::Transport(e.to_string())
    }
}

impl From<FetchError> for LibraryError {
    fn from(e: FetchError) -> Self {
        LibraryError::Transport(e.to_string())
    }
}

impl From<ArchiveError> for LibraryError {
    fn from(e: ArchiveError) -> Self {
        LibraryError::Transport(e.to_string())
    }
}

impl From<AuthError> for LibraryError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(m) => LibraryError::Validation(m),
            other => LibraryError::Transport(other.to_string()),
        }
    }
}

impl From<GenerationError> for LibraryError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Validation(m) => LibraryError::Validation(m),
            other => LibraryError::Transport(other.to_string()),
        }
    }
}
