//! Shared helpers for reading error bodies from the backend services.

use serde_json::Value;

/// Pull a human-readable message out of an error body.
///
/// The REST, storage, auth, and generation services each use a different key
/// for it; plain-text bodies are returned as-is.
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => ["message", "msg", "error_description", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .map(str::to_string),
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Read the status and error message from a failed response.
pub async fn read_failure(resp: reqwest::Response, fallback: &str) -> (u16, String) {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
    (status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgrest_message() {
        let body = r#"{"code":"42501","message":"permission denied","details":null,"hint":null}"#;
        assert_eq!(error_message(body).as_deref(), Some("permission denied"));
    }

    #[test]
    fn storage_message() {
        let body = r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("The resource already exists")
        );
    }

    #[test]
    fn auth_message() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn generation_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Prompt is required"}"#).as_deref(),
            Some("Prompt is required")
        );
    }

    #[test]
    fn plain_text_and_empty() {
        assert_eq!(error_message("bad gateway").as_deref(), Some("bad gateway"));
        assert_eq!(error_message("   "), None);
    }
}
