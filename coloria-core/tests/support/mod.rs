#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{Duration, TimeZone, Utc};
use coloria_common::{SortDirection, SortField};
use coloria_core::controller::{fetch_snapshot, LibraryController};
use coloria_core::fetch::{AssetFetcher, FetchError};
use coloria_core::gateway::{GatewayError, ImageGateway, SoftDeleteOutcome};
use coloria_core::models::{ImageDownloadInfo, NewImageRecord, SavedImageRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

pub fn record(id: &str, owner: &str, prompt: &str, minutes: i64) -> SavedImageRecord {
    SavedImageRecord {
        id: id.to_string(),
        owner_id: owner.to_string(),
        image_url: format!("https://cdn.test/{id}.png"),
        prompt: prompt.to_string(),
        style: "default".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes),
        deleted_at: None,
    }
}

/// Run one guarded load the way the library page does.
pub async fn reload<G>(controller: &mut LibraryController, gateway: &G, owner_id: &str) -> bool
where
    G: ImageGateway + ?Sized,
{
    let generation = controller.begin_load();
    let result = fetch_snapshot(gateway, owner_id, controller.sort()).await;
    controller.finish_load(generation, result)
}

/// In-memory saved_images table plus image bucket.
#[derive(Default)]
pub struct MemoryGateway {
    pub records: Mutex<Vec<SavedImageRecord>>,
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    /// Upload paths attempted, in order
    pub upload_attempts: Mutex<Vec<String>>,
    /// Address of the buffer handed to each upload attempt
    pub upload_buffers: Mutex<Vec<usize>>,
    /// Number of leading upload attempts that report a name collision
    pub collisions: Mutex<usize>,
    pub fail_soft_delete: Mutex<Option<String>>,
    pub fail_list: Mutex<Option<String>>,
    pub fail_resolve: Mutex<Option<String>>,
}

impl MemoryGateway {
    pub fn with_records(records: Vec<SavedImageRecord>) -> Self {
        let gateway = Self::default();
        *gateway.records.lock().unwrap() = records;
        gateway
    }

    pub fn active_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active())
            .map(|r| r.id.clone())
            .collect()
    }
}

#[async_trait]
impl ImageGateway for MemoryGateway {
    async fn list_active(
        &self,
        owner_id: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<SavedImageRecord>, GatewayError> {
        if let Some(message) = self.fail_list.lock().unwrap().clone() {
            return Err(GatewayError::Api {
                status: 500,
                message,
            });
        }
        let mut rows: Vec<SavedImageRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.owner_id == owner_id && r.is_active())
            .cloned()
            .collect();
        rows.sort_by(|a, b| match field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Prompt => a.prompt.cmp(&b.prompt),
        });
        if direction == SortDirection::Desc {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn search_active(
        &self,
        owner_id: &str,
        query: &str,
    ) -> Result<Vec<SavedImageRecord>, GatewayError> {
        let needle = query.to_lowercase();
        let rows = self
            .list_active(owner_id, SortField::CreatedAt, SortDirection::Desc)
            .await?;
        Ok(rows
            .into_iter()
            .filter(|r| r.prompt.to_lowercase().contains(&needle))
            .collect())
    }

    async fn resolve_urls(&self, ids: &[String]) -> Result<Vec<ImageDownloadInfo>, GatewayError> {
        if let Some(message) = self.fail_resolve.lock().unwrap().clone() {
            return Err(GatewayError::Api {
                status: 503,
                message,
            });
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active() && ids.contains(&r.id))
            .map(|r| ImageDownloadInfo {
                image_url: r.image_url.clone(),
                prompt: r.prompt.clone(),
            })
            .collect())
    }

    async fn soft_delete(&self, ids: &[String]) -> Result<SoftDeleteOutcome, GatewayError> {
        if let Some(message) = self.fail_soft_delete.lock().unwrap().clone() {
            return Err(GatewayError::Api {
                status: 400,
                message,
            });
        }
        let now = Utc::now();
        for r in self.records.lock().unwrap().iter_mut() {
            if ids.contains(&r.id) {
                r.deleted_at = Some(now);
            }
        }
        Ok(SoftDeleteOutcome { success: true })
    }

    async fn create_record(&self, record: &NewImageRecord) -> Result<(), GatewayError> {
        let mut records = self.records.lock().unwrap();
        let id = format!("rec-{}", records.len() + 1);
        records.push(SavedImageRecord {
            id,
            owner_id: record.user_id.clone(),
            image_url: record.image_url.clone(),
            prompt: record.prompt.clone(),
            style: record.style.clone(),
            created_at: record.created_at,
            deleted_at: None,
        });
        Ok(())
    }

    async fn upload_asset(&self, path: &str, data: Bytes) -> Result<String, GatewayError> {
        self.upload_attempts.lock().unwrap().push(path.to_string());
        self.upload_buffers.lock().unwrap().push(data.as_ptr() as usize);
        {
            let mut collisions = self.collisions.lock().unwrap();
            if *collisions > 0 {
                *collisions -= 1;
                return Err(GatewayError::AlreadyExists(path.to_string()));
            }
        }
        self.objects.lock().unwrap().insert(path.to_string(), data.to_vec());
        Ok(format!("https://cdn.test/public/images/{path}"))
    }
}

/// Serves canned bytes per URL; every other URL fails with 404.
#[derive(Default)]
pub struct MemoryFetcher {
    pub assets: HashMap<String, Vec<u8>>,
    pub failing: HashSet<String>,
    pub requested: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn serving(urls: &[&str]) -> Self {
        Self {
            assets: urls
                .iter()
                .map(|u| (u.to_string(), u.as_bytes().to_vec()))
                .collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl AssetFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(FetchError::Status(500));
        }
        self.assets.get(url).cloned().ok_or(FetchError::Status(404))
    }
}
