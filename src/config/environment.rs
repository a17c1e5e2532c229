//! Environment configuration
//!
//! Server settings read from environment variables (a `.env` file is loaded
//! by `main` beforehand).

use anyhow::{Context, Result};
use std::env;
use tracing::Level;

/// Server configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origins: Vec::new(),
            log_level: Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(raw) => raw
                .trim()
                .parse::<Level>()
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got '{}'", raw))?,
            Err(_) => defaults.log_level,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
            log_level,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Address to bind the listener to
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
