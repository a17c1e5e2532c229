//! Data models
//!
//! Records and projections read from the inventory table.

pub mod vehicle;
