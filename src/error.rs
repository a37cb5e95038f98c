//! Error taxonomy for tournament operations.

use thiserror::Error;

use crate::{persist::StoreError, types::PlayerId};

/// Errors returned by registration, result recording and pairing.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store failed; nothing was written.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// A player row was created without an id for its standing.
    #[error("registering {name:?} failed: {reason}")]
    Registration {
        /// Sanitized name being registered.
        name: String,
        /// What went wrong.
        reason: String,
    },

    /// The name was empty after sanitization.
    #[error("player name is empty after sanitization (raw: {raw:?})")]
    EmptyName {
        /// Name as supplied by the caller.
        raw: String,
    },

    /// An operation referenced a player without a standing row.
    #[error("{operation}: unknown player {id}")]
    UnknownPlayer {
        /// Operation that was rejected.
        operation: &'static str,
        /// Offending player id.
        id: PlayerId,
    },

    /// A match was reported with the same player on both sides.
    #[error("report_match: player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    /// Pairing was requested with an odd number of players.
    #[error("swiss_pairings: odd player count {0}")]
    OddPlayerCount(usize),
}

impl From<rusqlite::Error> for TournamentError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(StoreError::Sqlite(value))
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;
