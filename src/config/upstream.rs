use crate::core::{AppError, Result};
use reqwest::Url;
use serde::Deserialize;
use std::env;

/// Employee endpoint of the mock employee service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1/employee";

/// Location of the upstream employee API
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid UPSTREAM_BASE_URL: {}", e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(AppError::Configuration(format!(
                "UPSTREAM_BASE_URL must use http or https, got {}",
                other
            ))),
        }
    }
}
