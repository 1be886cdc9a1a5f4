use restaurant_orders::config::Config;
use restaurant_orders::lifecycle::tracing::setup_tracing;
use restaurant_orders::lifecycle::RestaurantSystem;
use restaurant_orders::routes::{router, AppState};
use restaurant_orders::seed::load_catalog;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting restaurant service");

    let system = RestaurantSystem::new(config.actor_buffer);

    if let Some(path) = &config.catalog_seed {
        load_catalog(path, &system.product_client, &system.restaurant_client)
            .await
            .map_err(|e| e.to_string())?;
    }

    let app = router(AppState::from(&system));
    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| format!("Cannot bind {address}: {e}"))?;
    info!("Server running on {address}");

    // `app` is consumed here, so its clients are gone once serving stops.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
