//! Database module
//!
//! Connection pool lifecycle for PostgreSQL.

pub mod connection;

pub use connection::DatabaseConnection;
