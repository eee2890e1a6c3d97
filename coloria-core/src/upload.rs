//! Saving a generated image: upload with a single name-collision retry, then
//! record it in the library.

use crate::error::LibraryError;
use crate::fetch::AssetFetcher;
use crate::gateway::{GatewayError, ImageGateway};
use crate::models::{NewImageRecord, DEFAULT_STYLE};
use bytes::Bytes;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, warn};

const SUFFIX_LEN: usize = 13;

pub const SAVE_SUCCEEDED: &str = "Image saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save image. Please try again.";

/// Storage path `<owner>/<epoch ms>-<13 random chars>.png`.
pub fn storage_path(owner_id: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!(
        "{}/{}-{}.png",
        owner_id,
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
}

/// Upload `data` for `owner_id` and return its public URL.
///
/// A name collision is retried exactly once under a fresh name; any other
/// failure, or a second collision, is returned.
pub async fn upload_with_retry<G>(
    gateway: &G,
    owner_id: &str,
    data: impl Into<Bytes>,
) -> Result<String, GatewayError>
where
    G: ImageGateway + ?Sized,
{
    let data = data.into();
    let first = storage_path(owner_id);
    match gateway.upload_asset(&first, data.clone()).await {
        Err(e) if e.is_already_exists() => {
            let second = storage_path(owner_id);
            warn!("{} already exists, retrying as {}", first, second);
            gateway.upload_asset(&second, data).await
        }
        other => other,
    }
}

/// Fetch the generated image, store it, and add it to the owner's library.
pub async fn save_generated_image<G, F>(
    gateway: &G,
    fetcher: &F,
    owner_id: &str,
    image_url: &str,
    prompt: &str,
) -> Result<String, LibraryError>
where
    G: ImageGateway + ?Sized,
    F: AssetFetcher + ?Sized,
{
    if owner_id.is_empty() {
        return Err(LibraryError::Validation(
            "You must be signed in to save images".to_string(),
        ));
    }
    if image_url.is_empty() {
        return Err(LibraryError::Validation("No image to save".to_string()));
    }

    let data = fetcher.fetch(image_url).await?;
    let public_url = upload_with_retry(gateway, owner_id, data).await?;
    gateway
        .create_record(&NewImageRecord::new(
            owner_id,
            &public_url,
            prompt,
            DEFAULT_STYLE,
        ))
        .await?;
    info!("Saved generated image to {}", public_url);
    Ok(public_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_path_shape() {
        let path = storage_path("user-1");
        let (owner, file) = path.split_once('/').unwrap();
        assert_eq!(owner, "user-1");
        let stem = file.strip_suffix(".png").unwrap();
        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn storage_paths_differ() {
        assert_ne!(storage_path("u"), storage_path("u"));
    }
}
