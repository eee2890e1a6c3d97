//! Client for the image generation proxy, plus the wire types it shares with
//! the server.

use crate::http::error_message;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const GENERATION_FAILED: &str = "Failed to generate image. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("No image URL in response")]
    MissingImage,
}

/// Join a relative endpoint onto the page origin. Absolute URLs pass through.
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

fn parse_success(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|_| GenerationError::MissingImage)?;
    if parsed.image_url.is_empty() {
        return Err(GenerationError::MissingImage);
    }
    Ok(parsed.image_url)
}

pub struct GenerationClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GenerationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Generate one image and return its URL.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::Validation(
                "Prompt is required".to_string(),
            ));
        }
        debug!("Requesting generation from {}", self.endpoint);
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message =
                error_message(&body).unwrap_or_else(|| "Failed to generate image".to_string());
            return Err(GenerationError::Service {
                status: status.as_u16(),
                message,
            });
        }
        let url = parse_success(&body)?;
        info!("Generated image {}", url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_endpoint() {
        assert_eq!(
            resolve_endpoint("http://localhost:8080/", "/api/generate-image"),
            "http://localhost:8080/api/generate-image"
        );
        assert_eq!(
            resolve_endpoint("http://localhost:8080", "https://gen.example.com/x"),
            "https://gen.example.com/x"
        );
    }

    #[test]
    fn success_body() {
        assert_eq!(
            parse_success(r#"{"imageUrl":"https://cdn/x.png"}"#).unwrap(),
            "https://cdn/x.png"
        );
    }

    #[test]
    fn success_without_url_is_error() {
        assert!(matches!(
            parse_success(r#"{"imageUrl":""}"#),
            Err(GenerationError::MissingImage)
        ));
        assert!(matches!(
            parse_success("{}"),
            Err(GenerationError::MissingImage)
        ));
    }

    #[tokio::test]
    async fn blank_prompt_rejected_before_request() {
        // Unroutable endpoint: reaching the network would yield Http, not Validation.
        let client = GenerationClient::new("http://127.0.0.1:9/api/generate-image");
        let err = client.generate("   ").await.unwrap_err();
        assert!(matches!(err, GenerationError::Validation(_)));
    }
}
