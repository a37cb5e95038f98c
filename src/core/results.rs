//! Match result recording.

use log::{debug, info, warn};
use rusqlite::{Connection, params};

use crate::{
    error::{TournamentError, TournamentResult},
    persist::sqlite::{SqliteStore, delete_standings},
    types::{MatchResult, PlayerId},
};

/// Records one match: the winner gains a win and a match, the loser a match.
///
/// Both updates commit together. An unknown id rolls back the whole report.
pub fn report_match(store: &SqliteStore, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
    report_round(store, &[MatchResult { winner, loser }])
}

/// Records every result of a round atomically.
///
/// The first invalid result aborts the round and none of it is applied.
pub fn report_round(store: &SqliteStore, results: &[MatchResult]) -> TournamentResult<()> {
    for result in results {
        if result.winner == result.loser {
            warn!("rejected self-match for player {}", result.winner);
            return Err(TournamentError::SelfMatch(result.winner));
        }
    }

    store
        .transaction(|tx| {
            for result in results {
                apply_result(tx, result)?;
            }
            Ok::<_, TournamentError>(())
        })
        .inspect_err(|err| warn!("match report rolled back: {err}"))?;

    for result in results {
        debug!("recorded {} beat {}", result.winner, result.loser);
    }
    Ok(())
}

fn apply_result(conn: &Connection, result: &MatchResult) -> TournamentResult<()> {
    let updated = conn.execute(
        "UPDATE standings SET score = score + 1, matches = matches + 1 WHERE player_id = ?1",
        params![result.winner],
    )?;
    if updated == 0 {
        return Err(TournamentError::UnknownPlayer {
            operation: "report_match",
            id: result.winner,
        });
    }

    let updated = conn.execute(
        "UPDATE standings SET matches = matches + 1 WHERE player_id = ?1",
        params![result.loser],
    )?;
    if updated == 0 {
        return Err(TournamentError::UnknownPlayer {
            operation: "report_match",
            id: result.loser,
        });
    }

    Ok(())
}

/// Clears all results. Every registered player keeps a zero standing.
pub fn delete_matches(store: &SqliteStore) -> TournamentResult<()> {
    let reseeded = store.transaction(|tx| {
        delete_standings(tx)?;
        let reseeded = tx.execute(
            "INSERT INTO standings (player_id, score, matches) SELECT id, 0, 0 FROM players",
            [],
        )?;
        Ok::<_, TournamentError>(reseeded)
    })?;

    info!("cleared match results ({reseeded} standings reset)");
    Ok(())
}
