pub mod vehicle_query;
pub mod vehicle_repository;

pub use vehicle_query::VehicleQuery;
pub use vehicle_repository::{PgVehicleRepository, VehicleRepository};
