use wb_db::ModuleRepository;
use wb_server::{build_app_state, build_router, logger, service_settings};
use wb_service::{LogMailer, LogNotifier, Notifier, Services, WebhookNotifier};
use wb_ws::ShutdownCoordinator;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = wb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting wb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = wb_db::open_pool(&database_path, config.database.pool_size).await?;

    info!("Running database migrations...");
    wb_db::migrate(&pool).await?;
    let modules = ModuleRepository::seed(&pool).await?;
    info!("Migrations complete, {} modules available", modules.len());

    let notifier: Arc<dyn Notifier> = match &config.notification.webhook_url {
        Some(url) => {
            info!("Notifications: webhook delivery enabled");
            Arc::new(WebhookNotifier::new(url.clone())?)
        }
        None => {
            info!("Notifications: no webhook configured, logging only");
            Arc::new(LogNotifier)
        }
    };
    let mailer = Arc::new(LogMailer::new(config.notification.mail_from.clone()));

    let services = Services::new(pool, service_settings(&config)?, notifier, mailer);

    let shutdown = ShutdownCoordinator::new();
    let app_state = build_app_state(services, &config, shutdown.clone());
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
