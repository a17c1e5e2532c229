//! Database configuration
//!
//! Connection options and pool sizing for PostgreSQL.

use anyhow::{bail, Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5432;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        Self {
            connect_options,
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
        }
    }

    /// Reads `DATABASE_URL`, or assembles the options from `DB_USER`,
    /// `DB_PASSWORD`, `DB_SERVER` and `DB_DATABASE`.
    pub fn from_env() -> Result<Self> {
        let connect_options = match env::var("DATABASE_URL") {
            Ok(url) => url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid PostgreSQL URL")?,
            Err(_) => compose_options(
                env::var("DB_USER").ok(),
                env::var("DB_PASSWORD").ok(),
                env::var("DB_SERVER").ok(),
                env::var("DB_DATABASE").ok(),
            )?,
        };

        let mut config = Self::new(connect_options);
        if let Some(max) = read_number("DB_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        if let Some(min) = read_number("DB_MIN_CONNECTIONS")? {
            config.min_connections = min;
        }
        if let Some(secs) = read_number("DB_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = Duration::from_secs(secs.into());
        }
        if config.min_connections > config.max_connections {
            bail!(
                "DB_MIN_CONNECTIONS ({}) exceeds DB_MAX_CONNECTIONS ({})",
                config.min_connections,
                config.max_connections
            );
        }
        Ok(config)
    }

    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
    }

    /// `postgres://user@host:port/db`, without the password, for logging
    pub fn describe(&self) -> String {
        let options = &self.connect_options;
        let user = match options.get_username() {
            "" => String::new(),
            user => format!("{}@", user),
        };
        format!(
            "postgres://{}{}:{}/{}",
            user,
            options.get_host(),
            options.get_port(),
            options.get_database().unwrap_or_default()
        )
    }
}

fn read_number(key: &str) -> Result<Option<u32>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .with_context(|| format!("{} must be a positive integer, got '{}'", key, raw)),
        Err(_) => Ok(None),
    }
}

/// Splits `host`, `host:port` or `[v6-addr]:port`.
fn split_server(server: &str) -> Result<(&str, u16)> {
    let (host, port) = if let Some(rest) = server.strip_prefix('[') {
        match rest.split_once(']') {
            Some((host, "")) => (host, None),
            Some((host, tail)) => match tail.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None => bail!("DB_SERVER '{}' is not a valid address", server),
            },
            None => bail!("DB_SERVER '{}' is not a valid address", server),
        }
    } else {
        match server.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (server, None),
        }
    };

    let port = match port {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("DB_SERVER port must be a number, got '{}'", raw))?,
        None => DEFAULT_PORT,
    };
    if host.is_empty() {
        bail!("DB_SERVER '{}' has no host", server);
    }
    Ok((host, port))
}

// Credentials are set as option fields, never spliced into a URL
fn compose_options(
    user: Option<String>,
    password: Option<String>,
    server: Option<String>,
    database: Option<String>,
) -> Result<PgConnectOptions> {
    let (Some(server), Some(database)) = (server, database) else {
        bail!("DATABASE_URL or DB_SERVER and DB_DATABASE must be set");
    };
    let (host, port) = split_server(server.trim())?;

    let mut options = PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(&database);
    if let Some(user) = &user {
        options = options.username(user);
    }
    if let Some(password) = &password {
        options = options.password(password);
    }
    Ok(options)
}
