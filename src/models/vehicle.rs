//! Vehicle model
//!
//! Records read from the `UsedInventory` table. The table is populated
//! externally; nothing in this crate writes to it. JSON field names follow
//! the stored column names so the payloads match what the table exposes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full vehicle record, returned by the single-vehicle lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    #[serde(rename = "ID")]
    #[sqlx(rename = "ID")]
    pub id: i32,

    #[serde(rename = "STOCK_NUMBER")]
    #[sqlx(rename = "STOCK_NUMBER")]
    pub stock_number: String,

    #[serde(rename = "VIN")]
    #[sqlx(rename = "VIN")]
    pub vin: String,

    /// Free-form workflow stage code, e.g. `6-FRONTLINE`.
    #[serde(rename = "STATUS")]
    #[sqlx(rename = "STATUS")]
    pub status: String,

    #[serde(rename = "StatusPrefix1")]
    #[sqlx(rename = "StatusPrefix1")]
    pub status_prefix: Option<i32>,

    #[serde(rename = "MAKE")]
    #[sqlx(rename = "MAKE")]
    pub make: String,

    #[serde(rename = "MODEL")]
    #[sqlx(rename = "MODEL")]
    pub model: String,

    #[serde(rename = "YEAR")]
    #[sqlx(rename = "YEAR")]
    pub year: i32,

    #[serde(rename = "NEW")]
    #[sqlx(rename = "NEW")]
    pub is_new: bool,

    #[serde(rename = "ListPrice", with = "rust_decimal::serde::float_option", default)]
    #[sqlx(rename = "ListPrice")]
    pub list_price: Option<Decimal>,

    #[serde(rename = "ODOMETER")]
    #[sqlx(rename = "ODOMETER")]
    pub odometer: Option<i32>,

    #[serde(rename = "CONDITION")]
    #[sqlx(rename = "CONDITION")]
    pub condition: Option<String>,

    #[serde(rename = "DRIVETRAIN")]
    #[sqlx(rename = "DRIVETRAIN")]
    pub drivetrain: Option<String>,

    #[serde(rename = "COLOR")]
    #[sqlx(rename = "COLOR")]
    pub color: Option<String>,

    #[serde(rename = "INTERIOR")]
    #[sqlx(rename = "INTERIOR")]
    pub interior: Option<String>,
}

/// Reduced column set returned by the vehicle listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VehicleSummary {
    #[serde(rename = "ID")]
    #[sqlx(rename = "ID")]
    pub id: i32,

    #[serde(rename = "STOCK_NUMBER")]
    #[sqlx(rename = "STOCK_NUMBER")]
    pub stock_number: String,

    #[serde(rename = "STATUS")]
    #[sqlx(rename = "STATUS")]
    pub status: String,

    #[serde(rename = "MAKE")]
    #[sqlx(rename = "MAKE")]
    pub make: String,

    #[serde(rename = "MODEL")]
    #[sqlx(rename = "MODEL")]
    pub model: String,

    #[serde(rename = "YEAR")]
    #[sqlx(rename = "YEAR")]
    pub year: i32,

    #[serde(rename = "NEW")]
    #[sqlx(rename = "NEW")]
    pub is_new: bool,

    #[serde(rename = "ListPrice", with = "rust_decimal::serde::float_option", default)]
    #[sqlx(rename = "ListPrice")]
    pub list_price: Option<Decimal>,

    #[serde(rename = "StatusPrefix1")]
    #[sqlx(rename = "StatusPrefix1")]
    pub status_prefix: Option<i32>,
}

/// One row of the distinct status-prefix enumeration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, FromRow,
)]
pub struct StatusPrefix {
    #[serde(rename = "StatusPrefix1")]
    #[sqlx(rename = "StatusPrefix1")]
    pub value: i32,
}

/// Parsed listing filters. `None` means the filter was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilters {
    pub stock_number: Option<String>,
    pub vin: Option<String>,
    pub status_prefix: Option<i32>,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            stock_number: vehicle.stock_number.clone(),
            status: vehicle.status.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            is_new: vehicle.is_new,
            list_price: vehicle.list_price,
            status_prefix: vehicle.status_prefix,
        }
    }
}
