use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use coloria_core::generation::{GenerateErrorBody, GenerateRequest, GenerateResponse};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::fal::{ImageUpstream, UpstreamReply};

const PROMPT_REQUIRED: &str = "Prompt is required";
const UPSTREAM_FAILED: &str = "Failed to generate image from FAL AI";
const NO_IMAGE_URL: &str = "No image URL in response from FAL AI";

pub struct GenerateState {
    pub upstream: Arc<dyn ImageUpstream>,
}

#[derive(Deserialize)]
struct UpstreamImage {
    url: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamSuccess {
    #[serde(default)]
    images: Vec<UpstreamImage>,
}

#[derive(Deserialize)]
struct UpstreamFailure {
    error: Option<String>,
}

pub fn generate_router(state: Arc<GenerateState>) -> Router {
    Router::new()
        .route("/api/generate-image", post(generate_image))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(GenerateErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

async fn generate_image(State(state): State<Arc<GenerateState>>, body: Bytes) -> Response {
    let request: GenerateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("unreadable generation request: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };
    if request.prompt.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, PROMPT_REQUIRED);
    }

    match state.upstream.generate(&request.prompt).await {
        Ok(reply) => relay(reply),
        Err(e) => {
            error!("generation upstream unreachable: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Map an upstream reply onto the `{ imageUrl }` / `{ error }` contract.
fn relay(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if !status.is_success() {
        let message = serde_json::from_slice::<UpstreamFailure>(&reply.body)
            .ok()
            .and_then(|f| f.error)
            .unwrap_or_else(|| UPSTREAM_FAILED.to_string());
        warn!("upstream rejected generation ({status}): {message}");
        return error_response(status, message);
    }

    let success: UpstreamSuccess = match serde_json::from_slice(&reply.body) {
        Ok(success) => success,
        Err(e) => {
            error!("malformed upstream response: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };
    match success.images.into_iter().next().and_then(|image| image.url) {
        Some(image_url) => {
            info!("generated image {image_url}");
            Json(GenerateResponse { image_url }).into_response()
        }
        None => error_response(StatusCode::INTERNAL_SERVER_ERROR, NO_IMAGE_URL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fal::UpstreamError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct StubUpstream {
        reply: Result<UpstreamReply, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubUpstream {
        fn replying(status: u16, body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(UpstreamReply {
                    status,
                    body: body.to_string().into_bytes(),
                }),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn unreachable() -> Arc<Self> {
            Arc::new(Self {
                reply: Err("connection refused".to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ImageUpstream for StubUpstream {
        async fn generate(&self, prompt: &str) -> Result<UpstreamReply, UpstreamError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(UpstreamError::Transport)
        }
    }

    async fn post_json(upstream: Arc<StubUpstream>, body: &str) -> (StatusCode, serde_json::Value) {
        let router = generate_router(Arc::new(GenerateState { upstream }));
        let response = router
            .oneshot(
                Request::post("/api/generate-image")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_first_image_url() {
        let upstream = StubUpstream::replying(
            200,
            serde_json::json!({ "images": [{ "url": "https://cdn/a.png" }, { "url": "https://cdn/b.png" }] }),
        );
        let (status, body) = post_json(upstream.clone(), r#"{"prompt":"a red fox"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "imageUrl": "https://cdn/a.png" }));
        assert_eq!(*upstream.prompts.lock().unwrap(), vec!["a red fox".to_string()]);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_without_calling_upstream() {
        let upstream = StubUpstream::replying(200, serde_json::json!({}));
        let (status, body) = post_json(upstream.clone(), r#"{"prompt":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], PROMPT_REQUIRED);

        let (status, _) = post_json(upstream.clone(), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(upstream.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upstream_error_is_relayed_with_its_status() {
        let upstream = StubUpstream::replying(422, serde_json::json!({ "error": "prompt too long" }));
        let (status, body) = post_json(upstream, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "prompt too long");
    }

    #[tokio::test]
    async fn upstream_error_without_message_gets_default() {
        let upstream = StubUpstream::replying(503, serde_json::json!({ "detail": "busy" }));
        let (status, body) = post_json(upstream, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], UPSTREAM_FAILED);
    }

    #[tokio::test]
    async fn missing_image_url_is_a_server_error() {
        let upstream = StubUpstream::replying(200, serde_json::json!({ "images": [] }));
        let (status, body) = post_json(upstream, r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], NO_IMAGE_URL);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_server_error() {
        let (status, body) = post_json(StubUpstream::unreachable(), r#"{"prompt":"x"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "connection refused");
    }
}
