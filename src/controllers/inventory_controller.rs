use std::sync::Arc;

use crate::dto::vehicle_dto::VehicleSearchParams;
use crate::models::vehicle::{StatusPrefix, Vehicle, VehicleSummary};
use crate::repositories::vehicle_query::VehicleQuery;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// The three read-only inventory operations. Every call goes to the store;
/// nothing is cached between requests.
pub struct InventoryController {
    repository: Arc<dyn VehicleRepository>,
}

impl InventoryController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_statuses(&self) -> AppResult<Vec<StatusPrefix>> {
        self.repository.list_status_prefixes().await
    }

    pub async fn list_vehicles(
        &self,
        params: VehicleSearchParams,
    ) -> AppResult<Vec<VehicleSummary>> {
        let filters = params.into_filters()?;
        let query = VehicleQuery::from_filters(&filters);
        let vehicles = self.repository.list_vehicles(&query).await?;

        tracing::debug!(
            filters = query.predicates().len(),
            results = vehicles.len(),
            "vehicle search"
        );
        Ok(vehicles)
    }

    pub async fn get_vehicle(&self, id: i32) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle"))
    }
}
