//! Inventory browser
//!
//! Client side of the inventory service: filter state, result list and the
//! vehicle detail view, driven over HTTP.

pub mod client;
pub mod config;
pub mod render;
pub mod session;
pub mod state;

pub use client::{ClientError, InventoryApi, InventoryClient};
pub use config::BrowserConfig;
pub use session::BrowserSession;
pub use state::{BrowserState, DetailTab, Outcome, QueryState, SearchForm};
