use serde::{Deserialize, Serialize};

use crate::models::vehicle::VehicleFilters;
use crate::utils::errors::AppError;

// Query string of GET /api/vehicles, exactly as the browser sends it
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_prefix: Option<String>,
}

impl VehicleSearchParams {
    /// Empty values count as "no filter". A status prefix that is present
    /// but not an integer is rejected instead of being read as zero.
    pub fn into_filters(self) -> Result<VehicleFilters, AppError> {
        let status_prefix = match self.status_prefix.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
                AppError::InvalidFilter(format!(
                    "statusPrefix must be an integer, got '{}'",
                    raw
                ))
            })?),
        };

        Ok(VehicleFilters {
            stock_number: non_empty(self.stock_number),
            vin: non_empty(self.vin),
            status_prefix,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
