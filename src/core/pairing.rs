//! Swiss pairing of adjacent ranks.

use log::{debug, warn};

use crate::{
    error::{TournamentError, TournamentResult},
    persist::sqlite::SqliteStore,
    types::{Pairing, Standing},
};

use super::ranking::player_standings;

/// Pairs rank 1 with rank 2, rank 3 with rank 4, and so on.
///
/// `ranked` must already be in rank order. An odd count is rejected rather
/// than leaving the last player out.
pub fn pair_adjacent(ranked: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if ranked.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(ranked.len()));
    }

    Ok(ranked
        .chunks_exact(2)
        .map(|pair| Pairing::from_standings(&pair[0], &pair[1]))
        .collect())
}

/// Reads current standings and pairs the next round.
pub fn swiss_pairings(store: &SqliteStore) -> TournamentResult<Vec<Pairing>> {
    let standings = player_standings(store)?;
    let pairings = pair_adjacent(&standings)
        .inspect_err(|err| warn!("pairing refused: {err}"))?;
    debug!("paired {} players into {} boards", standings.len(), pairings.len());
    Ok(pairings)
}
