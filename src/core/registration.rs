//! Player registration.

use log::debug;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{TournamentError, TournamentResult},
    persist::sqlite::SqliteStore,
    types::PlayerId,
};

/// Inserts a player and its zero standing in one transaction.
///
/// `name` must already be sanitized. Either both rows are written or neither is.
pub fn register_player(store: &SqliteStore, name: &str) -> TournamentResult<PlayerId> {
    if name.is_empty() {
        return Err(TournamentError::EmptyName {
            raw: name.to_string(),
        });
    }

    let id = store.transaction(|tx| {
        let id: Option<PlayerId> = tx
            .query_row(
                "INSERT INTO players (name) VALUES (?1) RETURNING id",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        let Some(id) = id else {
            return Err(TournamentError::Registration {
                name: name.to_string(),
                reason: "store returned no player id".to_string(),
            });
        };

        tx.execute(
            "INSERT INTO standings (player_id, score, matches) VALUES (?1, 0, 0)",
            params![id],
        )
        .map_err(|err| TournamentError::Registration {
            name: name.to_string(),
            reason: format!("standing for player {id}: {err}"),
        })?;

        Ok(id)
    })?;

    debug!("registered player {id} ({name:?})");
    Ok(id)
}

/// Number of registered players.
pub fn count_players(store: &SqliteStore) -> TournamentResult<u64> {
    let counts: Vec<i64> = store.read("SELECT COUNT(id) FROM players", [], |row| row.get(0))?;
    Ok(counts.first().copied().unwrap_or(0).max(0) as u64)
}
