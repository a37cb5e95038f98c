//! SQLite-backed player/standings store with scoped connection checkout.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use log::{debug, info};
use rusqlite::{Connection, OpenFlags, Params, Row, Transaction, TransactionBehavior};

use super::{StoreConfig, StoreError, StoreResult};

/// Relational store for players and standings.
///
/// File databases check a connection out of a small idle pool for each
/// operation and hand it back before returning. In-memory databases live on a
/// single connection and operations take turns on it. Nothing is cached
/// between calls.
pub struct SqliteStore {
    target: String,
    busy_timeout: Duration,
    max_idle: usize,
    idle: Mutex<Vec<Connection>>,
    memory: Option<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens or creates the store described by `config` and applies the schema.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let mut store = Self {
            target: config.database.clone(),
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
            max_idle: config.max_idle_connections,
            idle: Mutex::new(Vec::new()),
            memory: None,
        };

        if config.is_in_memory() {
            let conn = Connection::open_in_memory()?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            conn.execute_batch(include_str!("schema.sql"))?;
            store.memory = Some(Mutex::new(conn));
        } else {
            let conn = store.connect()?;
            conn.execute_batch(include_str!("schema.sql"))?;
            store.release(conn);
        }

        info!("opened tournament store at {}", config.database);
        Ok(store)
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Runs `f` on a checked-out connection.
    ///
    /// A pooled connection goes back to the pool whether `f` succeeds or
    /// fails. If `f` panics the connection is closed instead.
    pub fn with_connection<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&mut Connection) -> Result<T, E>,
    {
        if let Some(memory) = &self.memory {
            // A panic inside `f` already rolled back any open transaction.
            let mut conn = memory.lock().unwrap_or_else(PoisonError::into_inner);
            return f(&mut *conn);
        }

        let mut conn = self.acquire()?;
        let result = f(&mut conn);
        self.release(conn);
        result
    }

    /// Runs a query and maps every returned row.
    pub fn read<T, P, F>(&self, sql: &str, params: P, map: F) -> StoreResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map(params, map)?;

            let mut out = Vec::new();
            for row in rows {
                out.push(row?);
            }
            Ok(out)
        })
    }

    /// Executes a single command and returns the affected row count.
    pub fn write<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        self.with_connection(|conn| Ok(conn.execute(sql, params)?))
    }

    /// Runs `f` inside one write transaction.
    ///
    /// Commits when `f` returns `Ok`. Any `Err` (or panic) drops the
    /// transaction, which rolls every statement back.
    pub fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        E: From<StoreError>,
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    {
        self.with_connection(|conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(StoreError::from)?;
            let value = f(&tx)?;
            tx.commit().map_err(StoreError::from)?;
            Ok(value)
        })
    }

    /// Deletes every standing row.
    pub fn clear_standings(&self) -> StoreResult<usize> {
        self.transaction(|tx| delete_standings(tx))
    }

    /// Deletes every player, clearing standings first in the same transaction.
    pub fn clear_players(&self) -> StoreResult<usize> {
        self.transaction(|tx| {
            delete_standings(tx)?;
            delete_players(tx)
        })
    }

    /// Verifies the store answers a trivial query.
    pub fn health_check(&self) -> StoreResult<()> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
    }

    /// True when backed by an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.memory.is_some()
    }

    fn acquire(&self) -> StoreResult<Connection> {
        let pooled = self.idle.lock().map_err(|_| StoreError::PoolPoisoned)?.pop();
        match pooled {
            Some(conn) => Ok(conn),
            None => self.connect(),
        }
    }

    fn release(&self, conn: Connection) {
        if let Ok(mut idle) = self.idle.lock() {
            if idle.len() < self.max_idle {
                idle.push(conn);
                return;
            }
        }
        debug!("closing surplus store connection");
    }

    fn connect(&self) -> StoreResult<Connection> {
        let flags = OpenFlags::default() | OpenFlags::SQLITE_OPEN_URI;
        let conn = Connection::open_with_flags(&self.target, flags)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(conn)
    }
}

/// Deletes all standings on an open connection or transaction.
pub fn delete_standings(conn: &Connection) -> StoreResult<usize> {
    Ok(conn.execute("DELETE FROM standings", [])?)
}

/// Deletes all players on an open connection or transaction.
///
/// Fails on a foreign-key violation if standings still reference them.
pub fn delete_players(conn: &Connection) -> StoreResult<usize> {
    Ok(conn.execute("DELETE FROM players", [])?)
}
