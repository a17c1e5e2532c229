//! Shared application state
//!
//! State handed to every axum handler. It holds no mutable data; each request
//! goes to the repository on its own.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::inventory_controller::InventoryController;
use crate::repositories::vehicle_repository::VehicleRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn VehicleRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn VehicleRepository>, config: EnvironmentConfig) -> Self {
        Self { repository, config }
    }

    pub fn inventory(&self) -> InventoryController {
        InventoryController::new(self.repository.clone())
    }
}
