//! Bulk actions over the selected library images.

use crate::archive::{build_zip, BULK_ARCHIVE_NAME};
use crate::error::LibraryError;
use crate::fetch::AssetFetcher;
use crate::filename::archive_entry_name;
use crate::gateway::ImageGateway;
use futures::future::join_all;
use tracing::{error, info, warn};

pub const DOWNLOAD_FAILED: &str = "Failed to download images. Please try again.";

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete the selected images? They will be permanently deleted after 30 days.";

/// A finished zip ready to hand to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub included: usize,
    pub skipped: usize,
}

fn require_selection(ids: &[String]) -> Result<(), LibraryError> {
    if ids.is_empty() {
        return Err(LibraryError::Validation("No images selected".to_string()));
    }
    Ok(())
}

/// Zip every selected image that can be fetched.
///
/// All fetches run concurrently. A failed fetch is logged and left out of the
/// archive, so the archive may come back empty. Only a failure to resolve the
/// selection or to build the archive is an error.
pub async fn bulk_download<G, F>(
    gateway: &G,
    fetcher: &F,
    ids: &[String],
) -> Result<BulkDownload, LibraryError>
where
    G: ImageGateway + ?Sized,
    F: AssetFetcher + ?Sized,
{
    require_selection(ids)?;
    let infos = gateway.resolve_urls(ids).await.map_err(|e| {
        error!("Failed to resolve selected images: {}", e);
        LibraryError::Transport(DOWNLOAD_FAILED.to_string())
    })?;

    let fetches = infos.iter().enumerate().map(|(index, info)| async move {
        match fetcher.fetch(&info.image_url).await {
            Ok(bytes) => Some((archive_entry_name(&info.prompt, index), bytes)),
            Err(e) => {
                warn!("Skipping {} in bulk download: {}", info.image_url, e);
                None
            }
        }
    });
    let entries: Vec<(String, Vec<u8>)> = join_all(fetches).await.into_iter().flatten().collect();

    let included = entries.len();
    let skipped = ids.len() - included.min(ids.len());
    if included == 0 {
        warn!("None of the {} selected images could be fetched", ids.len());
    }

    let bytes = build_zip(entries).map_err(|e| {
        error!("Failed to build {}: {}", BULK_ARCHIVE_NAME, e);
        LibraryError::Transport(DOWNLOAD_FAILED.to_string())
    })?;
    info!(
        "Built {} with {} images ({} skipped)",
        BULK_ARCHIVE_NAME, included, skipped
    );
    Ok(BulkDownload {
        file_name: BULK_ARCHIVE_NAME.to_string(),
        bytes,
        included,
        skipped,
    })
}

/// Soft delete every selected id in one backend call.
pub async fn bulk_soft_delete<G>(gateway: &G, ids: &[String]) -> Result<(), LibraryError>
where
    G: ImageGateway + ?Sized,
{
    require_selection(ids)?;
    let outcome = gateway.soft_delete(ids).await?;
    if !outcome.success {
        return Err(LibraryError::Transport(
            "Failed to soft delete images".to_string(),
        ));
    }
    info!("Soft deleted {} selected images", ids.len());
    Ok(())
}
