//! Store connection configuration.

use std::env;

use thiserror::Error;

/// Database name that selects a private in-memory store.
pub const IN_MEMORY: &str = ":memory:";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 4;

/// Configuration errors raised while reading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but does not parse.
    #[error("invalid value {value:?} for {var}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Raw value found.
        value: String,
    },
}

/// How a [`crate::persist::sqlite::SqliteStore`] connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file path, or [`IN_MEMORY`].
    pub database: String,

    /// How long a connection waits on a locked database, in milliseconds.
    pub busy_timeout_ms: u64,

    /// Upper bound on pooled idle connections.
    pub max_idle_connections: usize,
}

impl StoreConfig {
    /// Configuration for `database` with default tuning.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
        }
    }

    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// Reads configuration from the environment.
    ///
    /// - `SWISSPAIR_DATABASE`: database path or `:memory:` (required)
    /// - `SWISSPAIR_BUSY_TIMEOUT_MS`: busy timeout (default: 5000)
    /// - `SWISSPAIR_MAX_IDLE`: idle pool size (default: 4)
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = env::var("SWISSPAIR_DATABASE")
            .map_err(|_| ConfigError::Missing("SWISSPAIR_DATABASE"))?;
        Ok(Self {
            database,
            busy_timeout_ms: parse_var("SWISSPAIR_BUSY_TIMEOUT_MS", DEFAULT_BUSY_TIMEOUT_MS)?,
            max_idle_connections: parse_var("SWISSPAIR_MAX_IDLE", DEFAULT_MAX_IDLE_CONNECTIONS)?,
        })
    }

    /// True when this configuration selects an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database == IN_MEMORY
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
