//! HTTP routes
//!
//! Routers for the inventory API and the health check.

pub mod health_routes;
pub mod vehicle_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Complete application router
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .nest("/api", vehicle_routes::create_inventory_router())
        .merge(health_routes::create_health_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
