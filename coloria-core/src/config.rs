use thiserror::Error;

pub const DEFAULT_STORAGE_BUCKET: &str = "images";
pub const DEFAULT_GENERATE_ENDPOINT: &str = "/api/generate-image";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),
    #[error("Configuration error: {0}")]
    Invalid(String),
}

/// Connection settings for the hosted backend and the generation proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub storage_bucket: String,
    /// Path or absolute URL of the generation proxy
    pub generate_endpoint: String,
    pub search_debounce_ms: u64,
}

impl Config {
    /// Load from the process environment, reading `.env` first when present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Values baked in at compile time. Used by the browser build.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            let value = match name {
                "COLORIA_SUPABASE_URL" => option_env!("COLORIA_SUPABASE_URL"),
                "COLORIA_SUPABASE_ANON_KEY" => option_env!("COLORIA_SUPABASE_ANON_KEY"),
                "COLORIA_STORAGE_BUCKET" => option_env!("COLORIA_STORAGE_BUCKET"),
                "COLORIA_GENERATE_ENDPOINT" => option_env!("COLORIA_GENERATE_ENDPOINT"),
                "COLORIA_SEARCH_DEBOUNCE_MS" => option_env!("COLORIA_SEARCH_DEBOUNCE_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let supabase_url = get("COLORIA_SUPABASE_URL")
            .ok_or(ConfigError::Missing("COLORIA_SUPABASE_URL"))?;
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "COLORIA_SUPABASE_URL must be an http(s) URL, got {supabase_url}"
            )));
        }
        let supabase_anon_key = get("COLORIA_SUPABASE_ANON_KEY")
            .ok_or(ConfigError::Missing("COLORIA_SUPABASE_ANON_KEY"))?;

        let search_debounce_ms = match get("COLORIA_SEARCH_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("COLORIA_SEARCH_DEBOUNCE_MS is not a number: {raw}"))
            })?,
            None => DEFAULT_SEARCH_DEBOUNCE_MS,
        };

        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key,
            storage_bucket: get("COLORIA_STORAGE_BUCKET")
                .unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string()),
            generate_endpoint: get("COLORIA_GENERATE_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GENERATE_ENDPOINT.to_string()),
            search_debounce_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_applied() {
        let config = Config::from_lookup(lookup(&[
            ("COLORIA_SUPABASE_URL", "https://proj.supabase.co/"),
            ("COLORIA_SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert_eq!(config.supabase_url, "https://proj.supabase.co");
        assert_eq!(config.storage_bucket, "images");
        assert_eq!(config.generate_endpoint, "/api/generate-image");
        assert_eq!(config.search_debounce_ms, 500);
    }

    #[test]
    fn missing_url() {
        let err = Config::from_lookup(lookup(&[("COLORIA_SUPABASE_ANON_KEY", "anon")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("COLORIA_SUPABASE_URL"));
    }

    #[test]
    fn bad_debounce_value() {
        let err = Config::from_lookup(lookup(&[
            ("COLORIA_SUPABASE_URL", "https://proj.supabase.co"),
            ("COLORIA_SUPABASE_ANON_KEY", "anon"),
            ("COLORIA_SEARCH_DEBOUNCE_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_http_url() {
        let err = Config::from_lookup(lookup(&[
            ("COLORIA_SUPABASE_URL", "proj.supabase.co"),
            ("COLORIA_SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
