//! Storage bootstrap: connection pooling, embedded migrations, and adapter
//! selection.
//!
//! [`connect`] turns an [`AppConfig`] into a pair of repository handles. The
//! `PostgreSQL` path builds an r2d2 pool, applies the embedded migrations,
//! and (when the profile asks for it) reverts every migration first so the
//! schema starts empty.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

use crate::config::{AppConfig, StorageMode};
use crate::status::{
    adapters::{memory::InMemoryStatusRepository, postgres::PostgresStatusRepository},
    ports::StatusRepository,
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};

/// Shared `PostgreSQL` connection pool.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// `PostgreSQL` storage was selected without a connection URL.
    #[error("no database URL configured for PostgreSQL storage")]
    MissingDatabaseUrl,

    /// The pool could not be built or could not hand out a connection.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),

    /// A migration failed to apply or revert.
    #[error("migration failed: {0}")]
    Migration(Box<dyn std::error::Error + Send + Sync>),

    /// The blocking bootstrap task panicked or was cancelled.
    #[error("storage bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Repository handles shared by the services.
#[derive(Clone)]
pub struct Repositories {
    /// Status persistence.
    pub statuses: Arc<dyn StatusRepository>,
    /// Task persistence.
    pub tasks: Arc<dyn TaskRepository>,
}

impl Repositories {
    /// Creates empty process-local repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            statuses: Arc::new(InMemoryStatusRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
        }
    }

    /// Creates `PostgreSQL` repositories sharing one pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            statuses: Arc::new(PostgresStatusRepository::new(pool.clone())),
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}

/// Prepares the storage backend selected by the configuration.
///
/// # Errors
///
/// Returns [`StorageError`] when the pool cannot be built or the migrations
/// fail.
pub async fn connect(config: &AppConfig) -> Result<Repositories, StorageError> {
    match config.storage_mode {
        StorageMode::InMemory => {
            tracing::info!("using in-memory storage");
            Ok(Repositories::in_memory())
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(StorageError::MissingDatabaseUrl)?;
            let pool_size = config.pool_size;
            let reset = config.reset_schema;

            let pool = tokio::task::spawn_blocking(move || {
                let built = build_pool(&url, pool_size)?;
                run_migrations(&built, reset)?;
                Ok::<_, StorageError>(built)
            })
            .await??;

            tracing::info!(pool_size, reset_schema = reset, "PostgreSQL storage ready");
            Ok(Repositories::postgres(&pool))
        }
    }
}

/// Builds a connection pool for the given URL.
///
/// This blocks until the pool has established its initial connections.
///
/// # Errors
///
/// Returns [`StorageError::Pool`] when no connection can be established.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, StorageError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Applies pending migrations, reverting all applied ones first when
/// `reset` is set.
///
/// Blocking; call from `spawn_blocking` or synchronous setup code.
///
/// # Errors
///
/// Returns [`StorageError`] when a connection cannot be checked out or a
/// migration fails.
pub fn run_migrations(pool: &PgPool, reset: bool) -> Result<(), StorageError> {
    let mut connection = pool.get()?;
    if reset {
        let reverted = connection
            .revert_all_migrations(MIGRATIONS)
            .map_err(StorageError::Migration)?;
        tracing::debug!(count = reverted.len(), "reverted migrations");
    }
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(StorageError::Migration)?;
    tracing::debug!(count = applied.len(), "applied migrations");
    Ok(())
}
