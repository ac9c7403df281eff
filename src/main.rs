mod app_state;
mod config;
mod database;
mod errors;
mod handlers;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod utils;

use std::net::SocketAddr;
use std::sync::Arc;

use app_state::AppState;
use config::AppConfig;
use database::init::init_db;
use repositories::{chat_repository::PgChatRepository, message_repository::PgMessageRepository};
use routes::app_routes::create_router;
use services::chat_service::ChatService;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Pool creation also brings the schema up to date
    let pool = match init_db(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Error initializing the database: {}", e);
            std::process::exit(1);
        }
    };

    // Repositories share the pool; the service owns the repositories
    let chat_service = ChatService::new(
        Arc::new(PgChatRepository::new(pool.clone())),
        Arc::new(PgMessageRepository::new(pool)),
    );
    let app = create_router(AppState::new(Arc::new(chat_service)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running on http://{}", addr);

    // ConnectInfo feeds the caller address to the request log
    let server = axum::Server::try_bind(&addr).map(|builder| {
        builder
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(shutdown_signal())
    });

    match server {
        Ok(server) => {
            if let Err(e) = server.await {
                error!("Server error: {}", e);
            }
        }
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    }
}

// RUST_LOG overrides the default filter
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves on Ctrl+C, or SIGTERM on unix, so in-flight requests can drain
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Interrupt received, draining connections"),
        _ = sigterm => info!("SIGTERM received, draining connections"),
    }
}
