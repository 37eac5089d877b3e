use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub backend_url: String,
    pub api_url: String,
    pub http_addr: String,
    pub static_dir: Option<PathBuf>,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub proxy_request_timeout_secs: u64,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let backend_url = parse_url_env("BACKEND_URL", "http://backend:8080")?;
        let api_url = parse_url_env("API_URL", "http://localhost:8080")?;

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let cors_origins =
            parse_cors_origins(std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let proxy_request_timeout_secs = parse_u64_env("PROXY_REQUEST_TIMEOUT_SECS", 30)?;
        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;
        let http_concurrency_limit = parse_usize_env("HTTP_CONCURRENCY_LIMIT", 256)?;

        Ok(Self {
            backend_url,
            api_url,
            http_addr,
            static_dir,
            cors_origins,
            log_level,
            proxy_request_timeout_secs,
            http_request_body_limit_bytes,
            http_concurrency_limit,
        })
    }
}

fn parse_url_env(key: &str, default: &str) -> Result<String> {
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    normalize_base_url(key, &value)
}

fn normalize_base_url(key: &str, raw: &str) -> Result<String> {
    let value = raw.trim().trim_end_matches('/');
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(anyhow!("{key} must start with http:// or https://"));
    }
    Ok(value.to_string())
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let url = normalize_base_url("BACKEND_URL", " http://backend:8080/ ").expect("valid url");
        assert_eq!(url, "http://backend:8080");
    }

    #[test]
    fn base_url_requires_scheme() {
        assert!(normalize_base_url("BACKEND_URL", "backend:8080").is_err());
        assert!(normalize_base_url("BACKEND_URL", "   ").is_err());
    }

    #[test]
    fn cors_origins_skip_blank_entries() {
        let origins = parse_cors_origins("http://a.local, ,http://b.local".to_string());
        assert_eq!(origins, vec!["http://a.local", "http://b.local"]);
    }
}
