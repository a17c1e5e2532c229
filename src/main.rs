use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use vehicle_inventory::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_inventory::database::DatabaseConnection;
use vehicle_inventory::repositories::PgVehicleRepository;
use vehicle_inventory::routes::create_app_router;
use vehicle_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Inventory API ({})", config.environment);

    let db_config = DatabaseConfig::from_env()?;
    let database = match DatabaseConnection::connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Database connection failed: {:#}", e);
            return Err(e);
        }
    };
    if let Err(e) = database.health_check().await {
        error!("❌ Database did not answer: {}", e);
        return Err(e.into());
    }

    let repository = Arc::new(PgVehicleRepository::new(database.pool().clone()));
    let app = create_app_router(AppState::new(repository, config.clone()));

    let addr: SocketAddr = config.server_url().parse()?;
    info!("🌐 Listening on http://{}", addr);
    info!("   GET  /api/statuses");
    info!("   GET  /api/vehicles?stockNumber=&vin=&statusPrefix=");
    info!("   GET  /api/vehicles/:id");
    info!("   GET  /health");
    if config.is_development() && config.cors_origins.is_empty() {
        info!("   CORS: any origin");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    database.close().await;

    if let Err(e) = served {
        error!("❌ Server error: {}", e);
        return Err(e.into());
    }

    info!("👋 Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 SIGTERM received, shutting down...");
        },
    }
}
