//! Saved image records as stored in the `saved_images` table.

use chrono::{DateTime, Utc};
use coloria_common::Searchable;
use serde::{Deserialize, Deserializer, Serialize};

/// Style tag written for images saved from the generator.
pub const DEFAULT_STYLE: &str = "default";

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One persisted generated image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedImageRecord {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub style: String,
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp; `None` while the record is active
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SavedImageRecord {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Caption for grid cards: the prompt, or `Image <id>` when it is empty.
    pub fn display_name(&self) -> String {
        if self.prompt.is_empty() {
            format!("Image {}", self.id)
        } else {
            self.prompt.clone()
        }
    }
}

impl Searchable for SavedImageRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Minimal projection used for downloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageDownloadInfo {
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prompt: String,
}

/// Insert payload for a newly saved image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewImageRecord {
    pub user_id: String,
    pub image_url: String,
    pub prompt: String,
    pub style: String,
    pub created_at: DateTime<Utc>,
}

impl NewImageRecord {
    pub fn new(user_id: &str, image_url: &str, prompt: &str, style: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            image_url: image_url.to_string(),
            prompt: prompt.to_string(),
            style: style.to_string(),
            created_at: Utc::now(),
        }
    }
}
