//! Shared primitive IDs and tournament records.

use serde::{Deserialize, Serialize};

/// Store-assigned player identifier. Monotonic, never reused.
pub type PlayerId = i64;

/// One row of the ranked standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player identifier.
    pub id: PlayerId,
    /// Sanitized display name.
    pub name: String,
    /// Matches won.
    pub wins: u32,
    /// Matches played.
    pub matches: u32,
}

/// A single board of the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player id.
    pub id1: PlayerId,
    /// Higher-ranked player name.
    pub name1: String,
    /// Lower-ranked player id.
    pub id2: PlayerId,
    /// Lower-ranked player name.
    pub name2: String,
}

impl Pairing {
    /// Builds a pairing from two adjacent standings rows.
    pub fn from_standings(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    /// Returns both player ids in board order.
    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.id1, self.id2)
    }
}

/// Outcome of a single played match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning player.
    pub winner: PlayerId,
    /// Losing player.
    pub loser: PlayerId,
}
