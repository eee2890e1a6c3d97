//! Upstream image generation service.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(String),
}

/// Raw upstream reply. The router decides what it means.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait ImageUpstream: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<UpstreamReply, UpstreamError>;
}

#[derive(Serialize)]
struct FalRequest<'a> {
    prompt: &'a str,
    image_size: &'static str,
    num_inference_steps: u32,
}

pub struct FalClient {
    endpoint: String,
    key: String,
    http: reqwest::Client,
}

impl FalClient {
    pub fn new(endpoint: String, key: String) -> Self {
        Self {
            endpoint,
            key,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageUpstream for FalClient {
    async fn generate(&self, prompt: &str) -> Result<UpstreamReply, UpstreamError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Key {}", self.key))
            .json(&FalRequest {
                prompt,
                image_size: "square_hd",
                num_inference_steps: 50,
            })
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        debug!("upstream replied {status} with {} bytes", body.len());
        Ok(UpstreamReply {
            status,
            body: body.to_vec(),
        })
    }
}
