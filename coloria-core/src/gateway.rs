//! Persistence gateway contract.
//!
//! Every call returns an explicit result type; the REST implementation lives
//! in `supabase`, tests use an in-memory implementation.

use crate::models::{ImageDownloadInfo, NewImageRecord, SavedImageRecord};
use async_trait::async_trait;
use bytes::Bytes;
use coloria_common::{SortDirection, SortField};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("The resource already exists: {0}")]
    AlreadyExists(String),
    #[error("Unexpected response: {0}")]
    Parse(String),
}

impl GatewayError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, GatewayError::AlreadyExists(_))
    }
}

/// Outcome of a bulk soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftDeleteOutcome {
    pub success: bool,
}

/// Narrow client for the saved-image table and the image bucket.
///
/// Browser futures are not `Send`, so the wasm build drops the bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ImageGateway {
    /// Active records for `owner_id`, ordered by the backend.
    async fn list_active(
        &self,
        owner_id: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<SavedImageRecord>, GatewayError>;

    /// Active records whose prompt contains `query`, newest first.
    async fn search_active(
        &self,
        owner_id: &str,
        query: &str,
    ) -> Result<Vec<SavedImageRecord>, GatewayError>;

    /// Download info for the active records among `ids`.
    async fn resolve_urls(&self, ids: &[String]) -> Result<Vec<ImageDownloadInfo>, GatewayError>;

    /// Mark every id deleted in one atomic backend operation.
    async fn soft_delete(&self, ids: &[String]) -> Result<SoftDeleteOutcome, GatewayError>;

    async fn create_record(&self, record: &NewImageRecord) -> Result<(), GatewayError>;

    /// Store `data` at `path` in the image bucket and return its public URL.
    ///
    /// Fails with `GatewayError::AlreadyExists` when `path` is taken.
    async fn upload_asset(&self, path: &str, data: Bytes) -> Result<String, GatewayError>;
}
