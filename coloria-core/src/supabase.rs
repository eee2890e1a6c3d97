//! REST gateway for the hosted backend (PostgREST tables, RPC, and storage).

use crate::config::Config;
use crate::gateway::{GatewayError, ImageGateway, SoftDeleteOutcome};
use crate::http::read_failure;
use crate::models::{ImageDownloadInfo, NewImageRecord, SavedImageRecord};
use async_trait::async_trait;
use bytes::Bytes;
use coloria_common::{SortDirection, SortField};
use tracing::{debug, info};

const TABLE: &str = "saved_images";
const SOFT_DELETE_RPC: &str = "soft_delete_images";
const ALREADY_EXISTS_MESSAGE: &str = "The resource already exists";

#[derive(Clone)]
pub struct SupabaseGateway {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    bucket: String,
    http: reqwest::Client,
}

impl SupabaseGateway {
    pub fn new(base_url: &str, anon_key: &str, bucket: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: None,
            bucket: bucket.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            &config.storage_bucket,
        )
    }

    /// Act on behalf of a signed-in user so row-level security applies.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Public URL of an object in the image bucket.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.access_token.as_deref().unwrap_or(&self.anon_key);
        req.header("apikey", &self.anon_key).bearer_auth(token)
    }

    async fn get_rows<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Vec<T>, GatewayError> {
        let url = self.rest_url(&format!("{TABLE}?{query}"));
        debug!("GET {}", url);
        let resp = self.authorized(self.http.get(&url)).send().await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, "Request failed").await;
            return Err(GatewayError::Api { status, message });
        }
        Ok(resp.json().await?)
    }
}

/// `order` clause for a sort column and direction.
fn order_clause(field: SortField, direction: SortDirection) -> String {
    format!("{}.{}", field.column(), direction.as_str())
}

/// PostgREST `in.(...)` filter with every id quoted.
fn in_list(ids: &[String]) -> String {
    let quoted: Vec<String> = ids
        .iter()
        .map(|id| format!("\"{}\"", id.replace('"', "")))
        .collect();
    urlencoding::encode(&format!("({})", quoted.join(","))).into_owned()
}

fn list_query(owner_id: &str, field: SortField, direction: SortDirection) -> String {
    format!(
        "select=*&user_id=eq.{}&deleted_at=is.null&order={}",
        urlencoding::encode(owner_id),
        order_clause(field, direction)
    )
}

fn search_query(owner_id: &str, query: &str) -> String {
    format!(
        "select=*&user_id=eq.{}&prompt=ilike.{}&deleted_at=is.null&order={}",
        urlencoding::encode(owner_id),
        urlencoding::encode(&format!("*{query}*")),
        order_clause(SortField::CreatedAt, SortDirection::Desc)
    )
}

fn resolve_query(ids: &[String]) -> String {
    format!(
        "select=image_url,prompt&id=in.{}&deleted_at=is.null",
        in_list(ids)
    )
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ImageGateway for SupabaseGateway {
    async fn list_active(
        &self,
        owner_id: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<SavedImageRecord>, GatewayError> {
        let rows: Vec<SavedImageRecord> = self
            .get_rows(&list_query(owner_id, field, direction))
            .await?;
        debug!("Fetched {} saved images", rows.len());
        Ok(rows)
    }

    async fn search_active(
        &self,
        owner_id: &str,
        query: &str,
    ) -> Result<Vec<SavedImageRecord>, GatewayError> {
        self.get_rows(&search_query(owner_id, query)).await
    }

    async fn resolve_urls(&self, ids: &[String]) -> Result<Vec<ImageDownloadInfo>, GatewayError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_rows(&resolve_query(ids)).await
    }

    async fn soft_delete(&self, ids: &[String]) -> Result<SoftDeleteOutcome, GatewayError> {
        let url = self.rest_url(&format!("rpc/{SOFT_DELETE_RPC}"));
        let resp = self
            .authorized(self.http.post(&url))
            .json(&serde_json::json!({ "image_ids": ids }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, "Soft delete failed").await;
            return Err(GatewayError::Api {
                status,
                message: format!("Failed to soft delete images: {message}"),
            });
        }
        info!("Soft deleted {} images", ids.len());
        Ok(SoftDeleteOutcome { success: true })
    }

    async fn create_record(&self, record: &NewImageRecord) -> Result<(), GatewayError> {
        let url = self.rest_url(TABLE);
        let resp = self
            .authorized(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, "Insert failed").await;
            return Err(GatewayError::Api { status, message });
        }
        Ok(())
    }

    async fn upload_asset(&self, path: &str, data: Bytes) -> Result<String, GatewayError> {
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );
        debug!("Uploading {} ({} bytes)", path, data.len());
        let resp = self
            .authorized(self.http.post(&url))
            .header("Content-Type", "image/png")
            .header("Cache-Control", "max-age=3600")
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await?;
        if !resp.status().is_success() {
            let (status, message) = read_failure(resp, "Upload failed").await;
            if status == 409 || message == ALREADY_EXISTS_MESSAGE {
                return Err(GatewayError::AlreadyExists(path.to_string()));
            }
            return Err(GatewayError::Api { status, message });
        }
        Ok(self.public_url(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_filters_active_rows() {
        let q = list_query("user-1", SortField::Prompt, SortDirection::Asc);
        assert_eq!(
            q,
            "select=*&user_id=eq.user-1&deleted_at=is.null&order=prompt.asc"
        );
    }

    #[test]
    fn search_query_wraps_wildcards() {
        let q = search_query("u", "red fox");
        assert!(q.contains("prompt=ilike.%2Ared%20fox%2A"));
        assert!(q.contains("deleted_at=is.null"));
        assert!(q.ends_with("order=created_at.desc"));
    }

    #[test]
    fn resolve_query_quotes_ids() {
        let q = resolve_query(&["a".to_string(), "b".to_string()]);
        assert_eq!(
            q,
            "select=image_url,prompt&id=in.%28%22a%22%2C%22b%22%29&deleted_at=is.null"
        );
    }

    #[test]
    fn public_url_layout() {
        let gw = SupabaseGateway::new("https://proj.supabase.co/", "anon", "images");
        assert_eq!(
            gw.public_url("user-1/1.png"),
            "https://proj.supabase.co/storage/v1/object/public/images/user-1/1.png"
        );
    }
}
