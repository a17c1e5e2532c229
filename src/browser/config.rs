use anyhow::{Context, Result};
use std::env;

/// Status prefix preselected on start-up ("active inventory").
pub const LEGACY_DEFAULT_STATUS_PREFIX: i32 = 6;

/// Inventory browser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub api_url: String,
    /// `None` starts on "All Statuses".
    pub default_status_prefix: Option<i32>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3001".to_string(),
            default_status_prefix: Some(LEGACY_DEFAULT_STATUS_PREFIX),
        }
    }
}

impl BrowserConfig {
    /// Reads `INVENTORY_API_URL` and `DEFAULT_STATUS_PREFIX`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_status_prefix = match env::var("DEFAULT_STATUS_PREFIX") {
            Ok(raw) => parse_default_prefix(&raw)?,
            Err(_) => defaults.default_status_prefix,
        };

        Ok(Self {
            api_url: env::var("INVENTORY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            default_status_prefix,
        })
    }
}

fn parse_default_prefix(raw: &str) -> Result<Option<i32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .with_context(|| format!("DEFAULT_STATUS_PREFIX must be an integer, got '{}'", raw))
}
