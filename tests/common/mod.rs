#![allow(dead_code)]

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use vehicle_inventory::config::EnvironmentConfig;
use vehicle_inventory::models::vehicle::{StatusPrefix, Vehicle, VehicleSummary};
use vehicle_inventory::repositories::vehicle_query::{Column, FilterValue, Operator, Predicate};
use vehicle_inventory::repositories::{VehicleQuery, VehicleRepository};
use vehicle_inventory::routes::create_app_router;
use vehicle_inventory::state::AppState;
use vehicle_inventory::utils::errors::AppResult;

/// Repository over a fixed set of rows. Predicates are evaluated the way
/// PostgreSQL evaluates the rendered query.
#[derive(Default)]
pub struct MemoryRepository {
    rows: Vec<Vehicle>,
    failure: Option<String>,
    pub queries: Mutex<Vec<VehicleQuery>>,
}

impl MemoryRepository {
    pub fn new(rows: Vec<Vehicle>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Every call fails like an unreachable database.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn check(&self) -> AppResult<()> {
        match &self.failure {
            Some(message) => Err(sqlx::Error::Protocol(message.clone()).into()),
            None => Ok(()),
        }
    }
}

fn matches(vehicle: &Vehicle, predicate: &Predicate) -> bool {
    match (predicate.operator, &predicate.value) {
        (Operator::Equals, FilterValue::Integer(expected)) => match predicate.column {
            Column::StatusPrefix => vehicle.status_prefix == Some(*expected),
            Column::Id => vehicle.id == *expected,
            Column::Year => vehicle.year == *expected,
            other => panic!("no integer comparison for {:?}", other),
        },
        (Operator::ContainsIgnoreCase, FilterValue::Text(needle)) => {
            let haystack = match predicate.column {
                Column::StockNumber => &vehicle.stock_number,
                Column::Vin => &vehicle.vin,
                Column::Status => &vehicle.status,
                Column::Make => &vehicle.make,
                Column::Model => &vehicle.model,
                other => panic!("no text comparison for {:?}", other),
            };
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        (operator, value) => panic!("unsupported predicate {:?} {:?}", operator, value),
    }
}

#[async_trait]
impl VehicleRepository for MemoryRepository {
    async fn list_status_prefixes(&self) -> AppResult<Vec<StatusPrefix>> {
        self.check()?;
        let distinct: BTreeSet<i32> = self.rows.iter().filter_map(|v| v.status_prefix).collect();
        Ok(distinct.into_iter().map(|value| StatusPrefix { value }).collect())
    }

    async fn list_vehicles(&self, query: &VehicleQuery) -> AppResult<Vec<VehicleSummary>> {
        self.check()?;
        self.queries.lock().unwrap().push(query.clone());
        Ok(self
            .rows
            .iter()
            .filter(|v| query.predicates().iter().all(|p| matches(v, p)))
            .map(VehicleSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Vehicle>> {
        self.check()?;
        Ok(self.rows.iter().find(|v| v.id == id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check()
    }
}

pub fn vehicle(id: i32, stock_number: &str, status_prefix: Option<i32>) -> Vehicle {
    Vehicle {
        id,
        stock_number: stock_number.to_string(),
        vin: format!("1HGCM8263{:08}", id),
        status: match status_prefix {
            Some(prefix) => format!("{}-STAGE", prefix),
            None => "UNASSIGNED".to_string(),
        },
        status_prefix,
        make: "Honda".to_string(),
        model: "Accord".to_string(),
        year: 2020,
        is_new: false,
        list_price: Some(Decimal::new(1899900, 2)),
        odometer: Some(42000),
        condition: Some("Good".to_string()),
        drivetrain: Some("FWD".to_string()),
        color: Some("Silver".to_string()),
        interior: Some("Gray".to_string()),
    }
}

/// Stock numbers A1001 (6), A1002 (3), B200 (6), Z0 (0) and N1 (no prefix).
pub fn sample_rows() -> Vec<Vehicle> {
    vec![
        vehicle(1, "A1001", Some(6)),
        vehicle(2, "A1002", Some(3)),
        vehicle(3, "B200", Some(6)),
        vehicle(4, "Z0", Some(0)),
        vehicle(5, "N1", None),
    ]
}

pub fn app_with(repository: Arc<MemoryRepository>) -> axum::Router {
    create_app_router(AppState::new(repository, EnvironmentConfig::default()))
}
