use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::vehicle::{StatusPrefix, Vehicle, VehicleSummary};
use crate::repositories::vehicle_query::{VehicleQuery, FIND_BY_ID_SQL, STATUS_PREFIXES_SQL};
use crate::utils::errors::AppResult;

/// Read-only access to the vehicle table.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Distinct non-null status prefixes, ascending.
    async fn list_status_prefixes(&self) -> AppResult<Vec<StatusPrefix>>;

    async fn list_vehicles(&self, query: &VehicleQuery) -> AppResult<Vec<VehicleSummary>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>>;

    /// Round trip to the store, used by the health endpoint.
    async fn ping(&self) -> AppResult<()>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn list_status_prefixes(&self) -> AppResult<Vec<StatusPrefix>> {
        let prefixes = sqlx::query_as::<_, StatusPrefix>(STATUS_PREFIXES_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(prefixes)
    }

    async fn list_vehicles(&self, query: &VehicleQuery) -> AppResult<Vec<VehicleSummary>> {
        let mut builder = query.build();
        tracing::debug!(sql = builder.sql(), "listing vehicles");

        let vehicles = builder
            .build_query_as::<VehicleSummary>()
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        let rows = sqlx::query_as::<_, Vehicle>(FIND_BY_ID_SQL)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(first_row(id, rows))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Keeps the first row of an identifier lookup. More than one row means the
/// table's uniqueness on `ID` has been broken upstream; that is logged, not fatal.
pub fn first_row(id: i32, rows: Vec<Vehicle>) -> Option<Vehicle> {
    if rows.len() > 1 {
        tracing::warn!(
            id,
            rows = rows.len(),
            "identifier matched more than one vehicle, using the first"
        );
    }
    rows.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i32, stock_number: &str) -> Vehicle {
        Vehicle {
            id,
            stock_number: stock_number.to_string(),
            vin: String::new(),
            status: "6-FRONTLINE".to_string(),
            status_prefix: Some(6),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2020,
            is_new: false,
            list_price: None,
            odometer: None,
            condition: None,
            drivetrain: None,
            color: None,
            interior: None,
        }
    }

    #[test]
    fn test_first_row_empty() {
        assert_eq!(first_row(1, Vec::new()), None);
    }

    #[test]
    fn test_first_row_single() {
        let found = first_row(1, vec![vehicle(1, "A1")]).unwrap();
        assert_eq!(found.stock_number, "A1");
    }

    #[test]
    fn test_first_row_duplicate_keeps_first() {
        let found = first_row(1, vec![vehicle(1, "A1"), vehicle(1, "A1-DUP")]).unwrap();
        assert_eq!(found.stock_number, "A1");
    }
}
