use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::vehicle_dto::VehicleSearchParams;
use crate::models::vehicle::{StatusPrefix, Vehicle, VehicleSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(list_statuses))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
}

async fn list_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusPrefix>>, AppError> {
    let statuses = state.inventory().list_statuses().await?;
    Ok(Json(statuses))
}

async fn list_vehicles(
    State(state): State<AppState>,
    params: Result<Query<VehicleSearchParams>, QueryRejection>,
) -> Result<Json<Vec<VehicleSummary>>, AppError> {
    // A query string serde cannot decode (e.g. a repeated key) is a filter error
    let Query(params) =
        params.map_err(|rejection| AppError::InvalidFilter(rejection.body_text()))?;
    let vehicles = state.inventory().list_vehicles(params).await?;
    Ok(Json(vehicles))
}

// The id is parsed here so a malformed one gets the same JSON error body
async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let id: i32 = id
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid vehicle id '{}'", id)))?;

    let vehicle = state.inventory().get_vehicle(id).await?;
    Ok(Json(vehicle))
}
