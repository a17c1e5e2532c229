//! Project configuration
//!
//! Database and server environment settings.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
