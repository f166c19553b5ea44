//! Process configuration selected once at startup.
//!
//! Two profiles exist. The development profile (selected when `DEBUG` is set
//! to a non-empty value) binds to loopback, logs at debug level, and resets
//! the schema on every start. The production profile binds to all
//! interfaces, logs at info level, and requires `DATABASE_URL`.
//!
//! # Environment Variables
//!
//! - `DEBUG`: any non-empty value selects the development profile
//! - `STORAGE_MODE`: `postgres` (default) | `in_memory`
//! - `DATABASE_URL`: `PostgreSQL` connection URL
//! - `HOST`: bind address
//! - `PORT`: bind port
//! - `DB_POOL_SIZE`: maximum pooled connections
//! - `RUST_LOG`: log filter directives

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_POOL_SIZE: u32 = 10;
const DEVELOPMENT_DATABASE_URL: &str = "postgres://localhost/tasktrack_dev";

/// Deployment profile selecting the default settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Local development defaults.
    Development,
    /// Production defaults.
    Production,
}

impl Profile {
    const fn default_host(self) -> &'static str {
        match self {
            Self::Development => "127.0.0.1",
            Self::Production => "0.0.0.0",
        }
    }

    const fn default_log_filter(self) -> &'static str {
        match self {
            Self::Development => "tasktrack=debug,tower_http=debug",
            Self::Production => "tasktrack=info,tower_http=info",
        }
    }

    const fn resets_schema(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Backend used for status and task persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// `PostgreSQL` through a Diesel connection pool.
    #[default]
    Postgres,
    /// Process-local maps; data is lost on shutdown.
    InMemory,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Errors raised while building [`AppConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `STORAGE_MODE` holds an unknown value.
    #[error("unsupported storage mode: {0}")]
    InvalidStorageMode(String),

    /// `PORT` is not a valid TCP port.
    #[error("invalid port '{0}'")]
    InvalidPort(String),

    /// `DB_POOL_SIZE` is not a positive integer.
    #[error("invalid pool size '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// Production `PostgreSQL` storage needs an explicit URL.
    #[error("DATABASE_URL must be set when running against PostgreSQL in production")]
    MissingDatabaseUrl,
}

/// Immutable process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Selected deployment profile.
    pub profile: Profile,
    /// Persistence backend.
    pub storage_mode: StorageMode,
    /// `PostgreSQL` URL; `None` only for in-memory storage.
    pub database_url: Option<String>,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// `tracing` filter directives used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Whether migrations are reverted and re-run on startup.
    pub reset_schema: bool,
    /// Maximum pooled database connections.
    pub pool_size: u32,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value or a
    /// required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty and whitespace-only values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is invalid or a required value
    /// is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let profile = if read("DEBUG").is_some() {
            Profile::Development
        } else {
            Profile::Production
        };

        let storage_mode = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();

        let database_url = match (read("DATABASE_URL"), storage_mode, profile) {
            (Some(url), _, _) => Some(url),
            (None, StorageMode::InMemory, _) => None,
            (None, StorageMode::Postgres, Profile::Development) => {
                Some(DEVELOPMENT_DATABASE_URL.to_owned())
            }
            (None, StorageMode::Postgres, Profile::Production) => {
                return Err(ConfigError::MissingDatabaseUrl);
            }
        };

        let port = read("PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value)))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let pool_size = read("DB_POOL_SIZE")
            .map(|value| match value.parse::<u32>() {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(ConfigError::InvalidPoolSize(value)),
            })
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        Ok(Self {
            profile,
            storage_mode,
            database_url,
            host: read("HOST").unwrap_or_else(|| profile.default_host().to_owned()),
            port,
            log_filter: read("RUST_LOG")
                .unwrap_or_else(|| profile.default_log_filter().to_owned()),
            reset_schema: profile.resets_schema(),
            pool_size,
        })
    }
}
