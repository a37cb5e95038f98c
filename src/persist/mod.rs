pub mod config;
pub mod sqlite;

use thiserror::Error;

pub use config::{ConfigError, StoreConfig};

/// Failures surfaced by the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity, constraint or SQL failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Invalid store configuration.
    #[error("store configuration: {0}")]
    Config(#[from] ConfigError),

    /// Export payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A thread panicked while holding the connection pool.
    #[error("connection pool poisoned")]
    PoolPoisoned,

    /// Any other store-level failure.
    #[error("{0}")]
    Message(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
