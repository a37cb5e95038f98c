//! Public tournament facade.

use log::{info, warn};

use crate::{
    core::{pairing, ranking, registration, results},
    error::{TournamentError, TournamentResult},
    persist::{StoreConfig, sqlite::SqliteStore},
    report::StandingsReport,
    sanitize::{NameSanitizer, StripMarkup},
    types::{MatchResult, Pairing, PlayerId, Standing},
};

/// A Swiss-system tournament backed by a relational store.
///
/// Every call reads or writes the store directly; standings are never cached.
pub struct Tournament {
    store: SqliteStore,
    sanitizer: Box<dyn NameSanitizer>,
}

impl Tournament {
    /// Opens the tournament stored in `config.database`.
    pub fn open(config: &StoreConfig) -> TournamentResult<Self> {
        Ok(Self::from_store(SqliteStore::open(config)?))
    }

    /// Opens an empty in-memory tournament.
    pub fn open_in_memory() -> TournamentResult<Self> {
        Ok(Self::from_store(SqliteStore::open_in_memory()?))
    }

    /// Wraps an existing store, sanitizing names with [`StripMarkup`].
    pub fn from_store(store: SqliteStore) -> Self {
        Self {
            store,
            sanitizer: Box::new(StripMarkup),
        }
    }

    /// Replaces the name sanitizer.
    pub fn with_sanitizer(mut self, sanitizer: impl NameSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Underlying store handle.
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    /// Removes all match results; players stay registered with zero records.
    pub fn delete_matches(&self) -> TournamentResult<()> {
        results::delete_matches(&self.store)
    }

    /// Removes every player and standing.
    pub fn delete_players(&self) -> TournamentResult<()> {
        let removed = self.store.clear_players()?;
        info!("deleted {removed} players");
        Ok(())
    }

    /// Number of registered players.
    pub fn count_players(&self) -> TournamentResult<u64> {
        registration::count_players(&self.store)
    }

    /// Sanitizes `name` and registers a new player with a zero record.
    pub fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let clean = self.sanitizer.sanitize(name);
        if clean.is_empty() {
            warn!("rejected empty player name {name:?}");
            return Err(TournamentError::EmptyName {
                raw: name.to_string(),
            });
        }
        registration::register_player(&self.store, &clean)
    }

    /// Players ordered by wins, then registration order.
    pub fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        ranking::player_standings(&self.store)
    }

    /// Records a single match result.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        results::report_match(&self.store, winner, loser)
    }

    /// Records a full round of results in one transaction.
    pub fn report_round(&self, round: &[MatchResult]) -> TournamentResult<()> {
        results::report_round(&self.store, round)
    }

    /// Pairs players of adjacent rank for the next round.
    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        pairing::swiss_pairings(&self.store)
    }

    /// Current standings as a versioned JSON document.
    pub fn export_standings_json(&self) -> TournamentResult<Vec<u8>> {
        let report = StandingsReport::new(self.player_standings()?);
        Ok(report.to_json()?)
    }
}
