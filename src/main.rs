//!
//! Pharmacy delivery-charge calculation service.
//! Reads configuration from TOML file (~/.config/pharmacy-charges/config.toml).

use tracing::{error, info};

use pharmacy_charges::shared::ShutdownCoordinator;
use pharmacy_charges::{create_api_router, default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CHARGES_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Pharmacy Delivery Charges service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    info!("📊 Prometheus metrics recorder installed");

    // Initialize shutdown coordinator
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();

    // Start listening for shutdown signals (SIGTERM, SIGINT)
    shutdown.start_signal_listener();

    // Create REST API router
    let router = create_api_router(prometheus_handle);

    // Start REST API server with graceful shutdown
    let addr = app_cfg.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let server = axum::serve(listener, router).with_graceful_shutdown({
        let signal = shutdown_signal.clone();
        async move {
            signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        }
    });

    let server_task = tokio::spawn(async move {
        if let Err(e) = server.await {
            error!("REST API server error: {}", e);
        }
    });

    // Wait for shutdown, then give in-flight requests a bounded window
    shutdown
        .shutdown_with_drain(|| async {
            let _ = server_task.await;
        })
        .await;

    info!("👋 Pharmacy Delivery Charges service shutdown complete");
    Ok(())
}
