//! Vehicle inventory
//!
//! Read-only REST API over the `UsedInventory` table and the terminal
//! browser that consumes it.

pub mod browser;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
