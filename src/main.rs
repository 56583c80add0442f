use dotenvy::dotenv;
use healthdesk::logging::init_tracing;
use healthdesk::metrics::{init_metrics, metrics_app};
use healthdesk::router::init_router;
use healthdesk::state::AppState;
use healthdesk_config::ServerConfig;
use healthdesk_db::{init_db_pool, run_migrations};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        error!(error = ?e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env();

    let db = init_db_pool().await?;
    run_migrations(&db).await?;

    if server_config.metrics_enabled {
        let handle = init_metrics()?;
        let metrics_addr = server_config.metrics_bind_address();
        let metrics_listener = TcpListener::bind(&metrics_addr).await?;
        info!("Metrics available at http://{}/metrics", metrics_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let state = AppState::from_env(db);
    let app = init_router(state);

    let addr = server_config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
