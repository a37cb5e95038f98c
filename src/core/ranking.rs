//! Standings ranking.

use std::cmp::Ordering;

use rusqlite::Row;

use crate::{error::TournamentResult, persist::sqlite::SqliteStore, types::Standing};

// A player without a standing row ranks as 0 wins / 0 matches.
const STANDINGS_SQL: &str = "SELECT players.id, players.name,
        COALESCE(standings.score, 0), COALESCE(standings.matches, 0)
    FROM players
    LEFT JOIN standings ON standings.player_id = players.id
    ORDER BY COALESCE(standings.score, 0) DESC, players.id ASC";

/// Reads every player with its record, by wins descending then id ascending.
pub fn player_standings(store: &SqliteStore) -> TournamentResult<Vec<Standing>> {
    Ok(store.read(STANDINGS_SQL, [], standing_from_row)?)
}

/// Sorts in-memory standings into the order [`player_standings`] returns:
/// wins descending, then id ascending (registration order).
pub fn rank(standings: &mut [Standing]) {
    standings.sort_by(rank_order);
}

/// Ordering used by [`rank`].
pub fn rank_order(a: &Standing, b: &Standing) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id))
}

fn standing_from_row(row: &Row<'_>) -> rusqlite::Result<Standing> {
    Ok(Standing {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
