// init.rs

use std::time::Duration;

use deadpool_postgres::{
    Config, Hook, HookError, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime,
};
use log::{debug, info};
use thiserror::Error;
use tokio_postgres::NoTls;

use crate::config::DatabaseConfig;
use crate::database::migrations::apply_migrations;

/// Database-related error types
#[derive(Error, Debug)]
pub enum DbError {
    /// Error when connection pool creation fails
    #[error("Failed to create pool: {0}")]
    PoolCreationError(String),

    /// Error when no connection could be checked out of the pool
    #[error("Failed to connect to database: {0}")]
    ConnectionError(String),

    /// Error when database migration fails
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Creates a connection pool from the application's database settings
///
/// # Arguments
/// * `settings` - Host, credentials and pool bounds
///
/// # Returns
/// * `Result<Pool, DbError>` - A connection pool or an error
fn create_pool(settings: &DatabaseConfig) -> Result<Pool, DbError> {
    let mut cfg = Config::new();

    cfg.host = Some(settings.host.clone());
    cfg.port = Some(settings.port);
    cfg.user = Some(settings.user.clone());
    cfg.password = Some(settings.password.clone());
    cfg.dbname = Some(settings.name.clone());
    cfg.ssl_mode = Some(settings.ssl_mode.clone());

    // Configure connection pool manager with fast recycling
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(settings.max_connections));

    // Connections past their lifetime are dropped on checkout and replaced
    let max_lifetime = settings.conn_max_lifetime;
    cfg.builder(NoTls)
        .map_err(|e| DbError::PoolCreationError(e.to_string()))?
        .runtime(Runtime::Tokio1)
        .pre_recycle(Hook::sync_fn(move |_, metrics| {
            if is_expired(metrics.age(), max_lifetime) {
                debug!("Closing pooled connection older than {:?}", max_lifetime);
                Err(HookError::Continue(None))
            } else {
                Ok(())
            }
        }))
        .build()
        .map_err(|e| DbError::PoolCreationError(e.to_string()))
}

fn is_expired(age: Duration, max_lifetime: Duration) -> bool {
    age >= max_lifetime
}

/// Initializes the database connection pool and applies migrations
///
/// # Returns
/// * `Result<Pool, DbError>` - Initialized connection pool or an error
pub async fn init_db(settings: &DatabaseConfig) -> Result<Pool, DbError> {
    let pool = create_pool(settings)?;

    // Get a connection and apply migrations
    let client = pool
        .get()
        .await
        .map_err(|e| DbError::ConnectionError(e.to_string()))?;

    apply_migrations(&client)
        .await
        .map_err(|e| DbError::MigrationError(e.to_string()))?;

    info!(
        "Database pool initialized for {}:{}/{} (max {} connections), schema is up to date",
        settings.host, settings.port, settings.name, settings.max_connections
    );
    Ok(pool)
}
